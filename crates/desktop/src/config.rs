//! Startup configuration read from environment variables.

use thiserror::Error;

use stockroom_observability::{LogFormat, ParseLogFormatError};

pub const LOG_FORMAT_VAR: &str = "STOCKROOM_LOG_FORMAT";
pub const SEED_DEMO_VAR: &str = "STOCKROOM_SEED_DEMO";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{LOG_FORMAT_VAR}: {0}")]
    LogFormat(#[from] ParseLogFormatError),

    #[error("{var}: expected a boolean, got '{value}'")]
    NotABool { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesktopConfig {
    pub log_format: LogFormat,
    /// Load the demo catalog before the first screen is shown.
    pub seed_demo: bool,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::default(),
            seed_demo: true,
        }
    }
}

impl DesktopConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key/value source. Unset keys keep
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            config.log_format = raw.parse()?;
        }
        if let Some(raw) = lookup(SEED_DEMO_VAR) {
            config.seed_demo = parse_bool(SEED_DEMO_VAR, &raw)?;
        }

        Ok(config)
    }
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::NotABool {
            var,
            value: raw.to_string(),
        }),
    }
}
