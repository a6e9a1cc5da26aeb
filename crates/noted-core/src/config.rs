//! Configuration for noted
//!
//! Read from `config.toml` in `$NOTED_CONFIG_DIR`, falling back to
//! `<user config dir>/noted/`. Every key is optional.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_invalid;
use crate::error::{NotedError, Result};

pub use types::{LinkConfig, NotedConfig, SearchConfig};

const CONFIG_DIR: &str = "noted";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "NOTED_CONFIG_DIR";

impl NotedConfig {
    /// Path of the user's configuration file
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    NotedError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the user's configuration, or defaults when there is none
    pub fn discover() -> Result<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Load and validate configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: NotedConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| NotedError::failed("serialize config", e))?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject values the ranking code cannot work with
    pub fn validate(&self) -> Result<()> {
        let search = &self.search;
        for (name, weight) in [
            ("search.title_weight", search.title_weight),
            ("search.tags_weight", search.tags_weight),
            ("search.body_weight", search.body_weight),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                bail_invalid!(name, weight);
            }
        }
        if search.max_weight() <= 0.0 {
            bail_invalid!("search weights", "all zero");
        }
        if !(0.0..=1.0).contains(&search.min_relevance) {
            bail_invalid!("search.min_relevance", search.min_relevance);
        }
        if self.links.min_word_len == 0 {
            bail_invalid!("links.min_word_len", 0);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = NotedConfig::default();
        assert_eq!(config.search.title_weight, 1.0);
        assert_eq!(config.search.tags_weight, 0.8);
        assert_eq!(config.search.body_weight, 0.5);
        assert_eq!(config.search.min_relevance, 0.4);
        assert!(config.search.stemming);
        assert!(config.search.limit.is_none());
        assert_eq!(config.links.min_word_len, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = NotedConfig {
            search: SearchConfig {
                limit: Some(5),
                stemming: false,
                ..Default::default()
            },
            ..Default::default()
        };
        config.save(&path).unwrap();

        let loaded = NotedConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[search]\nbody_weight = 0.25\n").unwrap();

        let loaded = NotedConfig::load(&path).unwrap();
        assert_eq!(loaded.search.body_weight, 0.25);
        assert_eq!(loaded.search.title_weight, 1.0);
        assert_eq!(loaded.links.min_word_len, 4);
    }

    #[test]
    fn test_invalid_relevance_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[search]\nmin_relevance = 1.5\n").unwrap();

        let err = NotedConfig::load(&path).unwrap_err();
        assert!(matches!(err, NotedError::InvalidValue { .. }));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut config = NotedConfig::default();
        config.search.tags_weight = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_word_len_rejected() {
        let mut config = NotedConfig::default();
        config.links.min_word_len = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[search\n").unwrap();

        let err = NotedConfig::load(&path).unwrap_err();
        assert!(matches!(err, NotedError::Toml(_)));
    }
}
