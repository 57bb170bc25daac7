//! External collaborator interfaces
//!
//! The tracker receives these as constructor arguments; it never reaches
//! into a global registry.

use crate::entities::{ChannelMember, Persona};
use crate::value_objects::{ChannelId, MemberId};

/// Canonical member resolution and caching
///
/// Inbound events carry a full member description; queries carry only an
/// id. Both paths go through this trait so every caller sees the same
/// canonical reference. Resolution cannot fail: an unknown member yields a
/// freshly created placeholder entry.
pub trait MemberResolver: Send + Sync {
    /// Insert or update the canonical entry for a member, returning the
    /// canonical reference
    fn upsert(&self, member: ChannelMember) -> ChannelMember;

    /// Resolve a member id within a channel, creating a placeholder entry
    /// when the member is not yet known
    fn resolve(&self, member_id: MemberId, channel_id: ChannelId) -> ChannelMember;
}

/// Exposes the persona of the local client
///
/// Queries use this to filter the caller's own typing status out of
/// results.
pub trait IdentityProvider: Send + Sync {
    /// The persona currently acting as "self"
    fn current_persona(&self) -> Persona;
}
