//! TOML-based application configuration.
//!
//! Stores user preferences:
//! - Model artifact override (path to a custom trained artifact)
//! - Display settings (12/24-hour clock)
//!
//! Configuration is stored at `~/.config/restwell/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::ConfigError;

/// Model selection configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Path to a custom model artifact. When unset, the bundled artifact
    /// is used.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Display configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_true")]
    pub use_24h_clock: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { use_24h_clock: true }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/restwell/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub display: DisplayConfig,
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
        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() {
            return Err(ConfigError::UnknownKey(key.to_string()));
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current
                    .as_object_mut()
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
                let existing = obj
                    .get(part)
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value.parse::<bool>().map_err(|_| ConfigError::InvalidValue {
                            key: key.to_string(),
                            message: format!("cannot parse '{value}' as bool"),
                        })?,
                    ),
                    // Option fields deserialize from null; treat them as strings.
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current
                .get_mut(part)
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        }

        Err(ConfigError::UnknownKey(key.to_string()))
    }

    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config/restwell"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk or return default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Save to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Get a value by dot-separated key, e.g. `display.use_24h_clock`.
    pub fn get(&self, key: &str) -> Option<String> {
        let root = serde_json::to_value(self).ok()?;
        let value = Self::get_json_value_by_path(&root, key)?;
        Some(match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// Set a value by dot-separated key and re-validate the whole config.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut root = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Self::set_json_value_by_path(&mut root, key, value)?;
        *self = serde_json::from_value(root).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert!(config.model.path.is_none());
        assert!(config.display.use_24h_clock);
    }

    #[test]
    fn get_by_dot_path() {
        let config = Config::default();
        assert_eq!(config.get("display.use_24h_clock").as_deref(), Some("true"));
        assert_eq!(config.get("model.path").as_deref(), Some("null"));
        assert!(config.get("no.such.key").is_none());
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut root = serde_json::to_value(Config::default()).unwrap();
        let err = Config::set_json_value_by_path(&mut root, "display.nope", "1");
        assert!(matches!(err, Err(ConfigError::UnknownKey(_))));
    }

    #[test]
    fn set_parses_bool() {
        let mut root = serde_json::to_value(Config::default()).unwrap();
        Config::set_json_value_by_path(&mut root, "display.use_24h_clock", "false").unwrap();
        let config: Config = serde_json::from_value(root).unwrap();
        assert!(!config.display.use_24h_clock);
    }

    #[test]
    fn toml_round_trip() {
        let mut config = Config::default();
        config.model.path = Some(PathBuf::from("/tmp/custom_model.json"));
        config.display.use_24h_clock = false;

        let text = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.model.path, config.model.path);
        assert!(!back.display.use_24h_clock);
    }
}
