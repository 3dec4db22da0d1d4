use std::env;
use std::num::NonZeroUsize;

use crate::core::split::DEFAULT_LIMIT;

/// Environment variable overriding the maximum chunk length.
pub const MSG_LIMIT_VAR: &str = "BENDER_SLACK_MSG_LIMIT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub msg_limit: NonZeroUsize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            msg_limit: DEFAULT_LIMIT,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("BENDER_SLACK_MSG_LIMIT must be a positive integer, got {value:?}")]
    InvalidMsgLimit { value: String },
}

/// Load configuration from environment. Returns an error if a set value is invalid.
pub fn load() -> Result<Config, ConfigError> {
    from_lookup(|key| env::var(key).ok())
}

fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = Config::default();
    if let Some(raw) = lookup(MSG_LIMIT_VAR) {
        let value = raw.trim();
        if !value.is_empty() {
            config.msg_limit = value
                .parse::<NonZeroUsize>()
                .map_err(|_| ConfigError::InvalidMsgLimit {
                    value: value.to_string(),
                })?;
            log::debug!("Using {}={}", MSG_LIMIT_VAR, config.msg_limit);
        }
    }
    Ok(config)
}
