//! # typing-bus
//!
//! In-process event transport for typing-status signals.
//!
//! ## Features
//!
//! - **Topics**: stable naming for event streams
//! - **Envelopes**: `event_type` + JSON payload wrapper
//! - **Bus**: per-topic `tokio::sync::broadcast` fan-out
//!
//! ## Example
//!
//! ```
//! use typing_bus::{BusEvent, EventBus, Topic};
//!
//! let bus = EventBus::default();
//! let mut rx = bus.subscribe(&Topic::TypingStatus);
//!
//! let event = BusEvent::new("TYPING_STATUS", serde_json::json!({}));
//! assert_eq!(bus.publish(&Topic::TypingStatus, event), 1);
//! assert!(rx.try_recv().is_ok());
//! ```

pub mod bus;
pub mod event;
pub mod topic;

// Re-export bus types
pub use bus::{EventBus, EventBusConfig};

// Re-export envelope types
pub use event::{BusError, BusEvent, TYPING_STATUS_EVENT};

// Re-export topic types
pub use topic::{Topic, CHANNEL_TOPIC_PREFIX, TYPING_STATUS_TOPIC};
