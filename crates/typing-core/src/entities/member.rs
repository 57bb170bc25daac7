//! Channel member entity - a participant in a channel

use serde::{Deserialize, Serialize};

use crate::entities::Persona;
use crate::value_objects::{ChannelId, MemberId};

/// A participant in a channel
///
/// Members are owned by the surrounding messaging system; the tracker
/// stores only ids and resolves full references on demand through a
/// [`MemberResolver`](crate::traits::MemberResolver). A member belongs to
/// exactly one channel and carries the persona used for self-exclusion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelMember {
    pub id: MemberId,
    pub channel_id: ChannelId,
    pub persona: Persona,
}

impl ChannelMember {
    /// Create a new ChannelMember
    pub fn new(id: MemberId, channel_id: ChannelId, persona: Persona) -> Self {
        Self {
            id,
            channel_id,
            persona,
        }
    }

    /// Member reference whose identity has not been resolved yet
    #[must_use]
    pub fn placeholder(id: MemberId, channel_id: ChannelId) -> Self {
        Self {
            id,
            channel_id,
            persona: Persona::placeholder(),
        }
    }

    /// Check whether the member's identity is still unresolved
    #[inline]
    pub fn is_placeholder(&self) -> bool {
        self.persona.is_placeholder()
    }

    /// Check whether this member belongs to the given persona
    #[inline]
    pub fn has_persona(&self, persona: &Persona) -> bool {
        self.persona == *persona
    }
}
