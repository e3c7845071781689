//! Runtime configuration resolved from the process environment.
//!
//! # Responsibility
//! - Resolve logging level and directory for hosts that do not pass them
//!   explicitly.
//!
//! # Invariants
//! - Blank environment values behave as unset.
//! - Resolution never fails; `validate()` reports unusable values.

use crate::logging::{default_log_level, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Environment variable holding the log level.
pub const ENV_LOG_LEVEL: &str = "LISTSTORE_LOG_LEVEL";
/// Environment variable holding the absolute log directory.
pub const ENV_LOG_DIR: &str = "LISTSTORE_LOG_DIR";

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLevel(String),
    InvalidLogDir(PathBuf),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLevel(value) => write!(f, "unsupported log level `{value}`"),
            Self::InvalidLogDir(path) => {
                write!(f, "log dir must be an absolute path, got `{}`", path.display())
            }
        }
    }
}

impl Error for ConfigError {}

/// Core runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub log_level: String,
    /// `None` disables file logging.
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Resolves configuration from `LISTSTORE_LOG_LEVEL` / `LISTSTORE_LOG_DIR`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(level) = non_blank(lookup(ENV_LOG_LEVEL)) {
            config.log_level = level;
        }
        config.log_dir = non_blank(lookup(ENV_LOG_DIR)).map(PathBuf::from);
        config
    }

    /// Checks that the level is supported and the log dir is absolute.
    pub fn validate(&self) -> Result<(), ConfigError> {
        normalize_level(&self.log_level)
            .map_err(|_| ConfigError::InvalidLevel(self.log_level.clone()))?;
        if let Some(dir) = &self.log_dir {
            if !dir.is_absolute() {
                return Err(ConfigError::InvalidLogDir(dir.clone()));
            }
        }
        Ok(())
    }

    pub fn log_dir(&self) -> Option<&Path> {
        self.log_dir.as_deref()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, CoreConfig, ENV_LOG_DIR, ENV_LOG_LEVEL};
    use crate::logging::default_log_level;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_values_fall_back_to_defaults() {
        let config = CoreConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.log_level, default_log_level());
        assert!(config.log_dir.is_none());
        config.validate().expect("defaults should validate");
    }

    #[test]
    fn blank_values_behave_as_unset() {
        let config =
            CoreConfig::from_lookup(lookup_from(&[(ENV_LOG_LEVEL, "  "), (ENV_LOG_DIR, "")]));
        assert_eq!(config, CoreConfig::default());
    }

    #[test]
    fn reads_trimmed_values() {
        let dir = std::env::temp_dir();
        let dir_text = format!(" {} ", dir.display());
        let config = CoreConfig::from_lookup(lookup_from(&[
            (ENV_LOG_LEVEL, " warn "),
            (ENV_LOG_DIR, dir_text.as_str()),
        ]));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir(), Some(dir.as_path()));
        config.validate().expect("absolute dir should validate");
    }

    #[test]
    fn validate_rejects_unknown_level_and_relative_dir() {
        let config = CoreConfig {
            log_level: "verbose".to_string(),
            log_dir: None,
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLevel(_))
        ));

        let config = CoreConfig {
            log_level: "info".to_string(),
            log_dir: Some(PathBuf::from("logs/dev")),
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLogDir(_))
        ));
    }
}
