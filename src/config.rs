//! Configuration Management
//!
//! Handles persistent configuration storage for cloudpile.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

/// Listen address of the inventory server when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000";

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Base URL of the inventory backend
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Last visited route path
    #[serde(default)]
    pub last_route: Option<String>,
    /// Show fetch failures in the status line (the grid keeps its loading state)
    #[serde(default)]
    pub surface_fetch_errors: bool,
    /// File this config was loaded from; unsaved configs have none
    #[serde(skip)]
    pub(crate) path: Option<PathBuf>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            last_route: None,
            surface_fetch_errors: false,
            path: None,
        }
    }
}

impl Config {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cloudpile").join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from `path`, falling back to defaults when missing or malformed.
    /// Later saves go back to `path`.
    pub fn load_from(path: &Path) -> Self {
        let mut config = if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(content) => Self::from_json(&content),
                Err(e) => {
                    tracing::warn!("Failed to read config {:?}: {}", path, e);
                    Self::default()
                },
            }
        } else {
            Self::default()
        };
        config.path = Some(path.to_path_buf());
        config
    }

    pub fn from_json(content: &str) -> Self {
        serde_json::from_str(content).unwrap_or_else(|e| {
            tracing::warn!("Ignoring malformed config: {}", e);
            Self::default()
        })
    }

    /// Save configuration to the file it was loaded from
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        self.save_to(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {:?}", parent))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).with_context(|| format!("Failed to write {:?}", path))?;

        Ok(())
    }

    /// Get effective endpoint (CLI > config > default)
    pub fn effective_endpoint(&self, cli: Option<&str>) -> Result<Url> {
        let raw = cli.unwrap_or(&self.endpoint);
        Url::parse(raw).with_context(|| format!("Invalid endpoint URL: {}", raw))
    }

    /// Get effective initial route (CLI > config > home)
    pub fn effective_route(&self, cli: Option<&str>) -> String {
        cli.map(str::to_string)
            .or_else(|| self.last_route.clone())
            .unwrap_or_else(|| "/".to_string())
    }

    /// Set last route and save
    pub fn set_last_route(&mut self, path: &str) -> Result<()> {
        self.last_route = Some(path.to_string());
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_empty_object() {
        let config = Config::from_json("{}");
        assert_eq!(config, Config::default());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_malformed_falls_back_to_defaults() {
        assert_eq!(Config::from_json("not json"), Config::default());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_json(r#"{"endpoint": "http://inventory:8080", "surface_fetch_errors": true}"#);
        assert_eq!(config.endpoint, "http://inventory:8080");
        assert!(config.surface_fetch_errors);
        assert_eq!(config.last_route, None);
    }

    #[test]
    fn test_cli_endpoint_wins() {
        let config = Config::default();
        let url = config
            .effective_endpoint(Some("http://override:9000"))
            .unwrap();
        assert_eq!(url.as_str(), "http://override:9000/");
        assert!(config.effective_endpoint(Some("not a url")).is_err());
    }

    #[test]
    fn test_effective_route_precedence() {
        let mut config = Config::default();
        assert_eq!(config.effective_route(None), "/");
        config.last_route = Some("/list".to_string());
        assert_eq!(config.effective_route(None), "/list");
        assert_eq!(config.effective_route(Some("/search")), "/search");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = std::env::temp_dir()
            .join(format!("cloudpile-test-{}", std::process::id()))
            .join("config.json");
        let config = Config {
            last_route: Some("/list".to_string()),
            ..Config::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path);
        assert_eq!(loaded.last_route.as_deref(), Some("/list"));
        assert_eq!(loaded.endpoint, DEFAULT_ENDPOINT);

        let mut loaded = loaded;
        loaded.set_last_route("/search").unwrap();
        assert_eq!(
            Config::load_from(&path).last_route.as_deref(),
            Some("/search")
        );
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_unsaved_config_does_not_write() {
        let mut config = Config::default();
        assert!(config.set_last_route("/list").is_ok());
        assert_eq!(config.last_route.as_deref(), Some("/list"));
    }
}
