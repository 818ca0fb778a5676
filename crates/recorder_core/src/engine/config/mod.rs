//! # Recorder Configuration
//!
//! Session-level settings supplied by the surrounding application.
//!
//! ## Usage
//! ```rust
//! use recorder_core::engine::config::RecorderConfig;
//!
//! let config = RecorderConfig::default();
//! assert_eq!(config.history_limit, 50);
//! ```
//!
//! A JSON file can be pointed at with `RECORDER_CONFIG_PATH`; missing fields
//! fall back to their defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::{env, fs};

use super::history::DEFAULT_HISTORY_LIMIT;
use crate::error::{RecorderError, Result};
use crate::models::{AttributeConfig, EventType};

pub const CONFIG_PATH_ENV: &str = "RECORDER_CONFIG_PATH";

/// Upper bound on `history_limit`; snapshots hold full event lists
const MAX_HISTORY_LIMIT: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecorderConfig {
    /// Snapshots kept for undo/redo, current one included (default: 50)
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Tab selected when the session opens (default: shot)
    #[serde(default)]
    pub default_event_type: EventType,

    /// Attribute selectors when the session opens
    #[serde(default)]
    pub default_attributes: AttributeConfig,

    /// Whether clicks are recorded before the first toggle (default: false)
    #[serde(default)]
    pub start_recording: bool,
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            default_event_type: EventType::default(),
            default_attributes: AttributeConfig::default(),
            start_recording: false,
        }
    }
}

impl RecorderConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read, parse and validate a config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&content)?;
        config.validate()?;
        log::debug!("Loaded recorder config from {:?}", path.as_ref());
        Ok(config)
    }

    /// Load from the file named by `RECORDER_CONFIG_PATH`, or defaults when unset.
    pub fn from_env() -> Result<Self> {
        let Ok(path) = env::var(CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        Self::load(path)
    }

    pub fn validate(&self) -> Result<()> {
        if self.history_limit == 0 {
            return Err(RecorderError::InvalidConfig {
                field: "history_limit",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.history_limit > MAX_HISTORY_LIMIT {
            return Err(RecorderError::InvalidConfig {
                field: "history_limit",
                reason: format!("must be at most {MAX_HISTORY_LIMIT}, got {}", self.history_limit),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BodyPart, Zone};
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = RecorderConfig::default();
        assert_eq!(config.history_limit, 50);
        assert_eq!(config.default_event_type, EventType::Shot);
        assert!(!config.start_recording);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config = RecorderConfig::from_json(
            r#"{"default_event_type": "pass", "default_attributes": {"bodyPart": "head", "zone": "finishing"}}"#,
        )
        .unwrap();
        assert_eq!(config.history_limit, DEFAULT_HISTORY_LIMIT);
        assert_eq!(config.default_event_type, EventType::Pass);
        assert_eq!(config.default_attributes.body_part, BodyPart::Head);
        assert_eq!(config.default_attributes.zone, Zone::Finishing);
    }

    #[test]
    fn test_validate_rejects_zero_limit() {
        let config = RecorderConfig { history_limit: 0, ..Default::default() };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, RecorderError::InvalidConfig { field: "history_limit", .. }));
    }

    #[test]
    fn test_validate_rejects_huge_limit() {
        let config = RecorderConfig { history_limit: MAX_HISTORY_LIMIT + 1, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"history_limit": 10, "start_recording": true}}"#).unwrap();

        let config = RecorderConfig::load(file.path()).unwrap();
        assert_eq!(config.history_limit, 10);
        assert!(config.start_recording);
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"history_limit": 0}}"#).unwrap();
        assert!(RecorderConfig::load(file.path()).is_err());

        let missing = RecorderConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(missing.is_recoverable());
    }

    // Only test in the crate touching RECORDER_CONFIG_PATH; keep the cases in one body.
    #[test]
    fn test_from_env() {
        env::remove_var(CONFIG_PATH_ENV);
        assert_eq!(RecorderConfig::from_env().unwrap(), RecorderConfig::default());

        env::set_var(CONFIG_PATH_ENV, "   ");
        assert_eq!(RecorderConfig::from_env().unwrap(), RecorderConfig::default());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"history_limit": 7, "default_event_type": "defensive"}}"#).unwrap();
        env::set_var(CONFIG_PATH_ENV, format!("  {}  ", file.path().display()));
        let config = RecorderConfig::from_env().unwrap();
        assert_eq!(config.history_limit, 7);
        assert_eq!(config.default_event_type, EventType::Defensive);

        env::set_var(CONFIG_PATH_ENV, "/definitely/not/here.json");
        assert!(RecorderConfig::from_env().is_err());

        env::remove_var(CONFIG_PATH_ENV);
    }

    #[test]
    fn test_json_round_trip_keeps_values() {
        let config = RecorderConfig { history_limit: 12, start_recording: true, ..Default::default() };
        let parsed = RecorderConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
