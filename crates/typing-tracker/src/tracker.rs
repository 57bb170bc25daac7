//! Typing tracker
//!
//! Keeps two indexes in lock-step: the per-channel sets of typing member
//! ids and the per-member expiry timers. A member id appears in a
//! channel's set iff it owns a live timer, and a channel key exists iff
//! its set is non-empty.

use dashmap::DashMap;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use typing_core::{ChannelId, ChannelMember, IdentityProvider, MemberId, MemberResolver};

use crate::timer::TimerHandle;

/// Idle window after which a typing member is evicted
pub const TYPING_EXPIRY: Duration = Duration::from_millis(60_000);

/// Tracks currently-typing members per channel
///
/// Driven by typing-status signals: a signal inserts the member and arms
/// (or re-arms) its expiry timer; a stop signal or the timer elapsing
/// removes it. Queries resolve ids back to member references and exclude
/// the caller's own persona.
///
/// Cheap to clone; clones share the same state.
#[derive(Clone)]
pub struct TypingTracker {
    inner: Arc<TrackerInner>,
}

struct TrackerInner {
    /// Typing member ids by channel
    members_by_channel: DashMap<ChannelId, HashSet<MemberId>>,

    /// Expiry timer by member id (at most one per member)
    timers: DashMap<MemberId, TimerHandle>,

    resolver: Arc<dyn MemberResolver>,
    identity: Arc<dyn IdentityProvider>,
    expiry: Duration,
}

impl TypingTracker {
    /// Create a new tracker with the default expiry window
    pub fn new(resolver: Arc<dyn MemberResolver>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self::with_expiry(resolver, identity, TYPING_EXPIRY)
    }

    /// Create a new tracker with a custom expiry window
    pub fn with_expiry(
        resolver: Arc<dyn MemberResolver>,
        identity: Arc<dyn IdentityProvider>,
        expiry: Duration,
    ) -> Self {
        Self {
            inner: Arc::new(TrackerInner {
                members_by_channel: DashMap::new(),
                timers: DashMap::new(),
                resolver,
                identity,
                expiry,
            }),
        }
    }

    /// Mark a member as typing
    ///
    /// Inserting an already-present member is a no-op on the set, but its
    /// expiry timer is replaced either way (refresh semantics, not
    /// stacking). The timer callback removes the same member after the
    /// expiry window.
    pub fn add_typing_member(&self, member: &ChannelMember) {
        self.inner
            .members_by_channel
            .entry(member.channel_id)
            .or_default()
            .insert(member.id);

        // The previous timer must be gone before the replacement is
        // armed, so a stale one can never fire after a refresh.
        if let Some((_, previous)) = self.inner.timers.remove(&member.id) {
            previous.cancel();
        }

        let tracker = self.clone();
        let evicted = member.clone();
        let handle = TimerHandle::schedule(self.inner.expiry, async move {
            tracing::trace!(
                member_id = %evicted.id,
                channel_id = %evicted.channel_id,
                "Typing expiry elapsed"
            );
            tracker.remove_typing_member(&evicted);
        });
        self.inner.timers.insert(member.id, handle);

        tracing::debug!(
            member_id = %member.id,
            channel_id = %member.channel_id,
            "Typing member added"
        );
    }

    /// Clear a member's typing status
    ///
    /// Covers both the explicit stop signal and natural expiry. Calling
    /// it for a member with no current entry is a safe no-op.
    pub fn remove_typing_member(&self, member: &ChannelMember) {
        self.inner
            .members_by_channel
            .alter(&member.channel_id, |_, mut ids| {
                ids.remove(&member.id);
                ids
            });

        // A channel never lingers with an empty set.
        self.inner
            .members_by_channel
            .remove_if(&member.channel_id, |_, ids| ids.is_empty());

        if let Some((_, timer)) = self.inner.timers.remove(&member.id) {
            timer.cancel();

            tracing::debug!(
                member_id = %member.id,
                channel_id = %member.channel_id,
                "Typing member removed"
            );
        }
    }

    /// Members currently typing in a channel, excluding the caller
    ///
    /// Ids are resolved through the member resolver; order is
    /// unspecified. Unknown channels yield an empty list.
    pub fn get_typing_members(&self, channel_id: ChannelId) -> Vec<ChannelMember> {
        // Snapshot the ids first so no map guard is held across the
        // resolver.
        let member_ids: Vec<MemberId> = match self.inner.members_by_channel.get(&channel_id) {
            Some(ids) => ids.iter().copied().collect(),
            None => return Vec::new(),
        };

        let own = self.inner.identity.current_persona();
        let members: Vec<ChannelMember> = member_ids
            .into_iter()
            .map(|id| self.inner.resolver.resolve(id, channel_id))
            .filter(|member| !member.has_persona(&own))
            .collect();

        tracing::trace!(
            channel_id = %channel_id,
            count = members.len(),
            "Typing members queried"
        );

        members
    }

    /// Whether anyone other than the caller is typing in a channel
    pub fn has_typing_members(&self, channel_id: ChannelId) -> bool {
        !self.get_typing_members(channel_id).is_empty()
    }

    /// The member resolver this tracker resolves queries through
    pub fn resolver(&self) -> &Arc<dyn MemberResolver> {
        &self.inner.resolver
    }

    /// Unfiltered snapshot of the typing member ids for a channel
    pub fn typing_member_ids(&self, channel_id: ChannelId) -> Vec<MemberId> {
        self.inner
            .members_by_channel
            .get(&channel_id)
            .map(|ids| ids.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Number of channels with at least one typing member
    pub fn channel_count(&self) -> usize {
        self.inner.members_by_channel.len()
    }

    /// Number of live expiry timers
    pub fn active_timer_count(&self) -> usize {
        self.inner.timers.len()
    }

    /// The configured expiry window
    pub fn expiry(&self) -> Duration {
        self.inner.expiry
    }
}

impl std::fmt::Debug for TypingTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypingTracker")
            .field("channels", &self.inner.members_by_channel.len())
            .field("timers", &self.inner.timers.len())
            .field("expiry", &self.inner.expiry)
            .finish()
    }
}
