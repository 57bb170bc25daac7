//! Application configuration structs
//!
//! Loads configuration from environment variables, with sane defaults for
//! every setting so a bare environment still produces a working tracker.

use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Main tracker configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TrackerConfig {
    pub app: AppSettings,
    pub typing: TypingSettings,
    pub bus: BusSettings,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Typing expiry settings
#[derive(Debug, Clone, Deserialize)]
pub struct TypingSettings {
    /// Idle window after which a typing member is evicted, in milliseconds
    #[serde(default = "default_typing_expiry_ms")]
    pub expiry_ms: u64,
}

impl TypingSettings {
    /// The expiry window as a `Duration`
    #[must_use]
    pub fn expiry(&self) -> Duration {
        Duration::from_millis(self.expiry_ms)
    }
}

/// Event bus settings
#[derive(Debug, Clone, Deserialize)]
pub struct BusSettings {
    /// Per-topic broadcast buffer size
    #[serde(default = "default_bus_buffer")]
    pub buffer: usize,
}

// Default value functions
fn default_app_name() -> String {
    "typing-tracker".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_typing_expiry_ms() -> u64 {
    60_000
}

fn default_bus_buffer() -> usize {
    1024
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            app: AppSettings {
                name: default_app_name(),
                env: default_env(),
            },
            typing: TypingSettings {
                expiry_ms: default_typing_expiry_ms(),
            },
            bus: BusSettings {
                buffer: default_bus_buffer(),
            },
        }
    }
}

impl TrackerConfig {
    /// Load configuration from environment variables
    ///
    /// Every variable is optional; a variable that is present but
    /// unparsable is an error rather than a silent fallback.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` for unparsable values.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: match env::var("APP_ENV") {
                    Ok(s) => match s.to_lowercase().as_str() {
                        "production" => Environment::Production,
                        "staging" => Environment::Staging,
                        "development" => Environment::Development,
                        _ => return Err(ConfigError::InvalidValue("APP_ENV", s)),
                    },
                    Err(_) => default_env(),
                },
            },
            typing: TypingSettings {
                expiry_ms: parse_var("TYPING_EXPIRY_MS", default_typing_expiry_ms)?,
            },
            bus: BusSettings {
                buffer: parse_var("BUS_BUFFER", default_bus_buffer)?,
            },
        })
    }
}

fn parse_var<T: std::str::FromStr>(
    name: &'static str,
    default: fn() -> T,
) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(s) => s
            .parse()
            .map_err(|_| ConfigError::InvalidValue(name, s)),
        Err(_) => Ok(default()),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
