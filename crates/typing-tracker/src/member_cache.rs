//! In-memory member cache
//!
//! Canonical store for member references, fed by inbound events and read
//! back by queries.

use dashmap::DashMap;
use std::sync::Arc;

use typing_core::{ChannelId, ChannelMember, MemberId, MemberResolver};

/// Caching member resolver backed by a concurrent map
#[derive(Default)]
pub struct MemberCache {
    members: DashMap<MemberId, ChannelMember>,
}

impl MemberCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self {
            members: DashMap::new(),
        }
    }

    /// Create an empty cache wrapped in Arc
    #[must_use]
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Look up a cached member without creating one
    pub fn get(&self, member_id: MemberId) -> Option<ChannelMember> {
        self.members.get(&member_id).map(|entry| entry.clone())
    }

    /// Number of cached members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl MemberResolver for MemberCache {
    fn upsert(&self, member: ChannelMember) -> ChannelMember {
        let canonical = self
            .members
            .entry(member.id)
            .and_modify(|existing| {
                // A payload without identity must not clobber a resolved
                // entry.
                if !member.is_placeholder() {
                    *existing = member.clone();
                }
            })
            .or_insert_with(|| member.clone())
            .value()
            .clone();

        tracing::debug!(
            member_id = %canonical.id,
            channel_id = %canonical.channel_id,
            "Member cached"
        );

        canonical
    }

    fn resolve(&self, member_id: MemberId, channel_id: ChannelId) -> ChannelMember {
        self.members
            .entry(member_id)
            .or_insert_with(|| ChannelMember::placeholder(member_id, channel_id))
            .value()
            .clone()
    }
}

impl std::fmt::Debug for MemberCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemberCache")
            .field("members", &self.members.len())
            .finish()
    }
}
