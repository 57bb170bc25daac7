//! # typing-common
//!
//! Shared utilities: environment-driven configuration and telemetry setup.

pub mod config;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{AppSettings, BusSettings, ConfigError, Environment, TrackerConfig, TypingSettings};
pub use telemetry::{init_telemetry, try_init_telemetry, TelemetryConfig, TelemetryError};
