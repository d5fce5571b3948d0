//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Prioritizer factor weights
//! - The UTC offset used to bucket completions
//! - Fallback mood and energy tokens for the CLI
//!
//! Configuration is stored at `~/.config/taskpulse/config.toml`.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use super::data_dir;
use crate::error::{ConfigError, Result};
use crate::priority::{PrioritizerConfig, ScoringWeights};

/// JSON type held by an optional key once it is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OptionalKind {
    Integer,
    Text,
}

/// Keys that may be unset, with the type their values take.
const OPTIONAL_KEYS: &[(&str, OptionalKind)] = &[
    ("analysis.utc_offset_minutes", OptionalKind::Integer),
    ("defaults.mood", OptionalKind::Text),
    ("defaults.energy_level", OptionalKind::Text),
];

fn optional_kind(key: &str) -> Option<OptionalKind> {
    OPTIONAL_KEYS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, kind)| *kind)
}

/// Productivity analysis configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Offset from UTC in minutes for bucketing; the machine's local offset
    /// is used when unset.
    #[serde(default)]
    pub utc_offset_minutes: Option<i32>,
}

/// Fallback user state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub energy_level: Option<String>,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/taskpulse/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub weights: ScoringWeights,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::InvalidValue {
            key: key.to_string(),
            message: "unknown config key".to_string(),
        };
        let unparsable = |expected: &str| ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("cannot parse '{value}' as {expected}"),
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match (optional_kind(key), existing) {
                    (Some(OptionalKind::Integer), _) => serde_json::Value::Number(
                        value
                            .parse::<i64>()
                            .map_err(|_| unparsable("integer"))?
                            .into(),
                    ),
                    (Some(OptionalKind::Text), _) => serde_json::Value::String(value.into()),
                    (None, serde_json::Value::Bool(_)) => serde_json::Value::Bool(
                        value.parse::<bool>().map_err(|_| unparsable("bool"))?,
                    ),
                    (None, serde_json::Value::Number(_)) => {
                        if let Ok(n) = value.parse::<i64>() {
                            serde_json::Value::Number(n.into())
                        } else if let Ok(n) = value.parse::<f64>() {
                            serde_json::Number::from_f64(n)
                                .map(serde_json::Value::Number)
                                .ok_or_else(|| unparsable("number"))?
                        } else {
                            return Err(unparsable("number"));
                        }
                    }
                    (None, serde_json::Value::Object(_) | serde_json::Value::Array(_)) => {
                        return Err(ConfigError::InvalidValue {
                            key: key.to_string(),
                            message: "cannot set a whole section".to_string(),
                        });
                    }
                    (None, serde_json::Value::Null | serde_json::Value::String(_)) => {
                        serde_json::Value::String(value.into())
                    }
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Check values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights
            .validate()
            .map_err(|e| ConfigError::InvalidValue {
                key: e.field().to_string(),
                message: e.to_string(),
            })?;
        self.utc_offset()?;
        Ok(())
    }

    /// Load from disk or return (and persist) the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read, parsed
    /// or validated, or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if !path.exists() {
            let cfg = Self::default();
            cfg.save_to(&path)?;
            return Ok(cfg);
        }
        Self::load_from(&path)
    }

    /// Load from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let cfg: Config =
            toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;

        if let Err(e) = cfg.validate() {
            warn!(path = %path.display(), error = %e, "rejecting configuration");
            return Err(e.into());
        }

        Ok(cfg)
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key without persisting.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the resulting configuration is invalid. `self` is left unchanged
    /// on error.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let candidate: Config = serde_json::from_value(json)?;
        candidate.validate()?;
        *self = candidate;
        Ok(())
    }

    /// Reset an optional key to unset without persisting.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not one of the optional keys.
    pub fn clear(&mut self, key: &str) -> Result<()> {
        if optional_kind(key).is_none() {
            return Err(ConfigError::InvalidValue {
                key: key.to_string(),
                message: "only optional keys can be unset".to_string(),
            }
            .into());
        }

        let mut json = serde_json::to_value(&*self)?;
        let (section, field) = key.split_once('.').unwrap_or((key, ""));
        if let Some(obj) = json.get_mut(section).and_then(|s| s.as_object_mut()) {
            obj.insert(field.to_string(), serde_json::Value::Null);
        }
        *self = serde_json::from_value(json)?;
        Ok(())
    }

    /// Set a config value by key and save. Returns error if key is unknown.
    ///
    /// # Errors
    ///
    /// See [`Config::apply`]; also fails if the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.apply(key, value)?;
        self.save()
    }

    /// Configured bucketing offset, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the offset is outside +/- 24 hours.
    pub fn utc_offset(&self) -> Result<Option<FixedOffset>, ConfigError> {
        let Some(minutes) = self.analysis.utc_offset_minutes else {
            return Ok(None);
        };

        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(Some)
            .ok_or_else(|| ConfigError::InvalidValue {
                key: "analysis.utc_offset_minutes".to_string(),
                message: format!("{minutes} minutes is not a valid UTC offset"),
            })
    }

    /// Prioritizer settings using the configured weights.
    pub fn prioritizer_config(&self, current_time: DateTime<Utc>) -> PrioritizerConfig {
        PrioritizerConfig {
            weights: self.weights,
            current_time,
            ..Default::default()
        }
    }
}
