use std::{env, fmt::Display, str::FromStr, time::Duration};

use shared::{CandidateOptions, ValidationError};
use tracing::{info, warn};

use crate::processor::{AppendPolicy, DEFAULT_APPEND_ATTEMPTS, DEFAULT_APPEND_BACKOFF, DEFAULT_APPEND_TIMEOUT};

pub const DEFAULT_OPTION_A: &str = "Cats";
pub const DEFAULT_OPTION_B: &str = "Dogs";
pub const DEFAULT_REDIS_URL: &str = "redis://redis:6379/0";
pub const DEFAULT_HOSTNAME: &str = "unknown";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid { key: &'static str, value: String, reason: String },
    #[error("Invalid candidate options: {0}")]
    Options(#[from] ValidationError),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub options: CandidateOptions,
    pub redis_url: String,
    pub hostname: String,
    pub append: AppendPolicy,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let option_a: String = try_load(&lookup, "OPTION_A", DEFAULT_OPTION_A)?;
        let option_b: String = try_load(&lookup, "OPTION_B", DEFAULT_OPTION_B)?;

        let attempts: u32 = try_load(&lookup, "APPEND_ATTEMPTS", &DEFAULT_APPEND_ATTEMPTS.to_string())?;
        if attempts == 0 {
            return Err(ConfigError::Invalid {
                key: "APPEND_ATTEMPTS",
                value: attempts.to_string(),
                reason: "at least one attempt is required".into(),
            });
        }

        let timeout_ms: u64 = try_load(&lookup, "APPEND_TIMEOUT_MS", &DEFAULT_APPEND_TIMEOUT.as_millis().to_string())?;
        let backoff_ms: u64 = try_load(&lookup, "APPEND_BACKOFF_MS", &DEFAULT_APPEND_BACKOFF.as_millis().to_string())?;

        Ok(Self {
            options: CandidateOptions::new(option_a, option_b)?,
            redis_url: try_load(&lookup, "REDIS_URL", DEFAULT_REDIS_URL)?,
            hostname: try_load(&lookup, "HOSTNAME", DEFAULT_HOSTNAME)?,
            append: AppendPolicy {
                attempts,
                timeout: Duration::from_millis(timeout_ms),
                backoff: Duration::from_millis(backoff_ms),
            },
        })
    }
}

fn try_load<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid { key, value, reason: e.to_string() }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.options.option_a(), "Cats");
        assert_eq!(config.options.option_b(), "Dogs");
        assert_eq!(config.redis_url, DEFAULT_REDIS_URL);
        assert_eq!(config.hostname, "unknown");
        assert_eq!(config.append, AppendPolicy::default());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("OPTION_A", "Tabs"),
            ("OPTION_B", "Spaces"),
            ("REDIS_URL", "redis://localhost:6380/2"),
            ("HOSTNAME", "vote-7d9f"),
            ("APPEND_ATTEMPTS", "3"),
            ("APPEND_TIMEOUT_MS", "250"),
            ("APPEND_BACKOFF_MS", "0"),
        ]))
        .unwrap();

        assert_eq!(config.options.iter().collect::<Vec<_>>(), ["Tabs", "Spaces"]);
        assert_eq!(config.redis_url, "redis://localhost:6380/2");
        assert_eq!(config.hostname, "vote-7d9f");
        assert_eq!(config.append.attempts, 3);
        assert_eq!(config.append.timeout, Duration::from_millis(250));
        assert_eq!(config.append.backoff, Duration::ZERO);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Config::from_lookup(lookup(&[("APPEND_TIMEOUT_MS", "soon")])),
            Err(ConfigError::Invalid { key: "APPEND_TIMEOUT_MS", .. })
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[("APPEND_ATTEMPTS", "0")])),
            Err(ConfigError::Invalid { key: "APPEND_ATTEMPTS", .. })
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[("OPTION_A", "Dogs")])),
            Err(ConfigError::Options(ValidationError::DuplicateOptions(_)))
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[("OPTION_B", "")])),
            Err(ConfigError::Options(ValidationError::EmptyOption))
        ));
    }
}
