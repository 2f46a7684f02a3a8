//! Engine configuration.
//!
//! TOML-backed, with defaults for every field so the engine runs
//! without a config file at all. Values are validated on load; the
//! over-max-health policy lives here because the right behavior is a
//! deployment decision, not an engine rule.
//!
//! ```toml
//! [engine]
//! name = "Questhall"
//! session_timeout = 480
//! clamp_health_to_max = false
//! default_player_name = "Adventurer"
//!
//! [logging]
//! level = "info"
//! ```

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineSection {
    #[serde(default = "default_name")]
    pub name: String,
    /// Idle minutes before a session is evicted.
    #[serde(default = "default_session_timeout")]
    pub session_timeout: u32,
    /// When true, healing past max silently clamps; when false the
    /// overflow persists and is only narrated.
    #[serde(default)]
    pub clamp_health_to_max: bool,
    #[serde(default = "default_player_name")]
    pub default_player_name: String,
}

fn default_name() -> String {
    "Questhall".to_string()
}

fn default_session_timeout() -> u32 {
    480
}

fn default_player_name() -> String {
    "Adventurer".to_string()
}

impl Default for EngineSection {
    fn default() -> Self {
        EngineSection {
            name: default_name(),
            session_timeout: default_session_timeout(),
            clamp_health_to_max: false,
            default_player_name: default_player_name(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineSection,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load and validate a config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| anyhow!("cannot read {}: {}", path.as_ref().display(), e))?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file if present, otherwise fall back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Config> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Config::default())
        }
    }

    /// Write a starter config file.
    pub fn create_default<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Config::default();
        let contents = toml::to_string_pretty(&config)?;
        std::fs::write(path.as_ref(), contents)
            .map_err(|e| anyhow!("cannot write {}: {}", path.as_ref().display(), e))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.engine.session_timeout == 0 {
            return Err(anyhow!("engine.session_timeout must be at least 1 minute"));
        }
        if self.engine.default_player_name.trim().is_empty() {
            return Err(anyhow!("engine.default_player_name must not be blank"));
        }
        match self.logging.level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => Ok(()),
            other => Err(anyhow!("logging.level '{}' is not a log level", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.engine.session_timeout, 480);
        assert!(!config.engine.clamp_health_to_max);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = Config::load_or_default("/definitely/not/here.toml").unwrap();
        assert_eq!(config.engine.name, "Questhall");
    }

    #[test]
    fn test_round_trip_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        Config::create_default(&path).unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.engine.session_timeout, 480);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_file_uses_field_defaults() {
        let config: Config = toml::from_str("[engine]\nsession_timeout = 30\n").unwrap();
        assert_eq!(config.engine.session_timeout, 30);
        assert_eq!(config.engine.name, "Questhall");
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = Config::default();
        config.engine.session_timeout = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());
    }
}
