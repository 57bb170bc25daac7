//! Configuration loading

mod tracker_config;

pub use tracker_config::{
    AppSettings, BusSettings, ConfigError, Environment, TrackerConfig, TypingSettings,
};
