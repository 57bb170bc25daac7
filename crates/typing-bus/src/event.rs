//! Event envelope
//!
//! Wraps every bus message in an `event_type` tag plus a JSON payload, so
//! one topic can carry more than one payload shape.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use typing_core::TypingStatusEvent;

/// Event type tag for typing-status payloads
pub const TYPING_STATUS_EVENT: &str = "TYPING_STATUS";

/// Error type for envelope encode/decode
#[derive(Debug, thiserror::Error)]
pub enum BusError {
    #[error("Failed to encode or decode payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Envelope for bus messages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusEvent {
    /// Event type name (e.g., "TYPING_STATUS")
    pub event_type: String,
    /// Event payload
    pub data: serde_json::Value,
}

impl BusEvent {
    /// Create a new envelope from a raw JSON payload
    #[must_use]
    pub fn new(event_type: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            event_type: event_type.into(),
            data,
        }
    }

    /// Create an envelope from a serializable payload
    pub fn from_payload<T: Serialize>(
        event_type: impl Into<String>,
        payload: &T,
    ) -> Result<Self, BusError> {
        Ok(Self::new(event_type, serde_json::to_value(payload)?))
    }

    /// Create a typing-status envelope
    pub fn typing_status(event: &TypingStatusEvent) -> Result<Self, BusError> {
        Self::from_payload(TYPING_STATUS_EVENT, event)
    }

    /// Decode the payload into a concrete type
    pub fn payload<T: DeserializeOwned>(&self) -> Result<T, BusError> {
        Ok(serde_json::from_value(self.data.clone())?)
    }

    /// Check the event type tag
    #[must_use]
    pub fn is(&self, event_type: &str) -> bool {
        self.event_type == event_type
    }
}
