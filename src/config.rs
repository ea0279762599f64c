//! Configuration types.

use std::time::Duration;

use crate::error::ConfigError;

/// Widget configuration.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// Pause before a flow's bot reply starts "typing".
    pub reply_delay: Duration,
    /// How long the typing placeholder stays up before the message lands.
    pub typing_delay: Duration,
    /// Pause between the signup confirmation and the navigation event.
    pub redirect_delay: Duration,
    /// One-shot auto-open timer after mount (skipped once dismissed).
    pub auto_open_after: Duration,
    /// Signup anchor emitted by the redirect flow.
    pub signup_url: String,
    /// Maximum accepted length of a free-text message, in characters.
    pub max_input_len: usize,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            reply_delay: Duration::from_millis(1000),
            typing_delay: Duration::from_millis(1500),
            redirect_delay: Duration::from_millis(1500),
            auto_open_after: Duration::from_secs(10),
            signup_url: "/#pricing".to_string(),
            max_input_len: 500,
        }
    }
}

impl WidgetConfig {
    /// Build a config from environment overrides on top of the defaults.
    ///
    /// Recognized variables: `SELFSERVE_REPLY_DELAY_MS`, `SELFSERVE_TYPING_DELAY_MS`,
    /// `SELFSERVE_AUTO_OPEN_SECS`, `SELFSERVE_SIGNUP_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            reply_delay: env_millis("SELFSERVE_REPLY_DELAY_MS", defaults.reply_delay)?,
            typing_delay: env_millis("SELFSERVE_TYPING_DELAY_MS", defaults.typing_delay)?,
            redirect_delay: defaults.redirect_delay,
            auto_open_after: env_secs("SELFSERVE_AUTO_OPEN_SECS", defaults.auto_open_after)?,
            signup_url: std::env::var("SELFSERVE_SIGNUP_URL").unwrap_or(defaults.signup_url),
            max_input_len: defaults.max_input_len,
        })
    }
}

fn env_millis(key: &str, default: Duration) -> Result<Duration, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => parse_millis(key, &raw),
        Err(_) => Ok(default),
    }
}

fn env_secs(key: &str, default: Duration) -> Result<Duration, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => parse_secs(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_millis(key: &str, raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("expected milliseconds as an integer, got {raw:?}"),
        })
}

fn parse_secs(key: &str, raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("expected seconds as an integer, got {raw:?}"),
        })
}
