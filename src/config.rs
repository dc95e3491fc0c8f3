//! Configuration Management
//!
//! Handles persistent configuration storage for the `openxbl` command.

use crate::xbl::api;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// OpenXBL API key
    #[serde(default)]
    pub api_key: Option<String>,
    /// API base URL override
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("openxbl").join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load configuration from `path`, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(())
    }

    /// Get effective API key (CLI > config)
    pub fn effective_api_key(&self, cli: Option<&str>) -> Option<String> {
        let usable = |key: &String| !key.trim().is_empty();
        cli.map(str::to_string)
            .filter(usable)
            .or_else(|| self.api_key.clone().filter(usable))
    }

    /// Get effective base URL (CLI > config > public API)
    pub fn effective_base_url(&self, cli: Option<&str>) -> String {
        cli.map(str::to_string)
            .or_else(|| self.base_url.clone())
            .unwrap_or_else(|| api::BASE_URL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("openxbl-test-{}-{}", std::process::id(), name))
            .join("config.json")
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = temp_config_path("roundtrip");
        let config = Config {
            api_key: Some("ABC123".to_string()),
            base_url: Some("http://localhost:8080".to_string()),
        };

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path), config);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_missing_or_corrupt_file_yields_default() {
        let path = temp_config_path("corrupt");
        assert_eq!(Config::load_from(&path), Config::default());

        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(Config::load_from(&path), Config::default());

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_effective_values_prefer_cli() {
        let config = Config {
            api_key: Some("from-config".to_string()),
            base_url: None,
        };

        assert_eq!(config.effective_api_key(Some("from-cli")).as_deref(), Some("from-cli"));
        assert_eq!(config.effective_api_key(None).as_deref(), Some("from-config"));
        assert_eq!(Config::default().effective_api_key(Some("  ")), None);
        assert_eq!(config.effective_api_key(Some("  ")).as_deref(), Some("from-config"));
        assert_eq!(config.effective_base_url(None), api::BASE_URL);
        assert_eq!(config.effective_base_url(Some("http://mock")), "http://mock");
    }
}
