//! Typing status event payload
//!
//! Carried on the event transport whenever a member starts or stops typing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{ChannelMember, Persona};
use crate::value_objects::{ChannelId, MemberId};

/// A typing-status signal for one member
///
/// `is_typing: true` means the member started (or is still) typing;
/// `false` means they stopped explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypingStatusEvent {
    pub channel_id: ChannelId,
    pub member_id: MemberId,
    pub persona: Persona,
    pub is_typing: bool,
    pub timestamp: DateTime<Utc>,
}

impl TypingStatusEvent {
    /// Signal that a member started typing
    #[must_use]
    pub fn started(member: &ChannelMember) -> Self {
        Self::with_flag(member, true)
    }

    /// Signal that a member stopped typing
    #[must_use]
    pub fn stopped(member: &ChannelMember) -> Self {
        Self::with_flag(member, false)
    }

    fn with_flag(member: &ChannelMember, is_typing: bool) -> Self {
        Self {
            channel_id: member.channel_id,
            member_id: member.id,
            persona: member.persona.clone(),
            is_typing,
            timestamp: Utc::now(),
        }
    }

    /// The member reference this event describes
    #[must_use]
    pub fn member(&self) -> ChannelMember {
        ChannelMember::new(self.member_id, self.channel_id, self.persona.clone())
    }
}
