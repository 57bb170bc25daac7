//! Topic definitions
//!
//! Defines the naming conventions for bus topics.

use typing_core::ChannelId;

/// Topic carrying typing-status signals for every channel
pub const TYPING_STATUS_TOPIC: &str = "channel.member/typing_status";
/// Topic prefix for channel-scoped events
pub const CHANNEL_TOPIC_PREFIX: &str = "channel:";

/// Bus topic types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Topic {
    /// Typing-status signals (all channels share one stream)
    TypingStatus,
    /// Events scoped to a single channel
    Channel(ChannelId),
    /// Free-form topic name
    Custom(String),
}

impl Topic {
    /// Create a channel-scoped topic
    #[must_use]
    pub fn channel(channel_id: ChannelId) -> Self {
        Self::Channel(channel_id)
    }

    /// Create a custom topic
    #[must_use]
    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom(name.into())
    }

    /// Get the topic name
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::TypingStatus => TYPING_STATUS_TOPIC.to_string(),
            Self::Channel(id) => format!("{CHANNEL_TOPIC_PREFIX}{id}"),
            Self::Custom(name) => name.clone(),
        }
    }

    /// Parse a topic name back to a `Topic`
    #[must_use]
    pub fn parse(name: &str) -> Self {
        if name == TYPING_STATUS_TOPIC {
            return Self::TypingStatus;
        }

        if let Some(id_str) = name.strip_prefix(CHANNEL_TOPIC_PREFIX) {
            if let Ok(id) = id_str.parse::<i64>() {
                return Self::Channel(ChannelId::from(id));
            }
        }

        Self::Custom(name.to_string())
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
