//! Configuration management.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;

/// Overrides the config file location.
pub const CONFIG_ENV: &str = "RELAYMAP_CONFIG";

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Relay inventory URL.
    pub relays_url: Option<String>,

    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,

    /// Where the server store lives.
    pub store_path: Option<PathBuf>,

    /// Default output format.
    pub output_format: Option<OutputFormat>,
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("net", "relaymap", "relaymap")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

impl Config {
    /// Get the config file path.
    pub fn path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        Ok(project_dirs()?.config_dir().join("config.toml"))
    }

    /// Load configuration from file.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from a specific file, defaulting when it is absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;

        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Save configuration to a specific file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Store path from the config file, or the platform data directory.
    pub fn resolve_store_path(&self) -> Result<PathBuf> {
        match &self.store_path {
            Some(path) => Ok(path.clone()),
            None => Ok(project_dirs()?.data_dir().join("servers.json")),
        }
    }

    /// Set a value by key name.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "relays_url" => self.relays_url = Some(value.to_string()),
            "timeout_secs" => {
                let secs: u64 = value
                    .parse()
                    .map_err(|_| anyhow::anyhow!("timeout_secs must be a whole number of seconds"))?;
                if secs == 0 {
                    anyhow::bail!("timeout_secs must be at least 1 second");
                }
                self.timeout_secs = Some(secs);
            }
            "store_path" => self.store_path = Some(PathBuf::from(value)),
            "output_format" => self.output_format = Some(value.parse()?),
            _ => anyhow::bail!(
                "Unknown config key: {}\n\
                 Valid keys: relays_url, timeout_secs, store_path, output_format",
                key
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn saved_values_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set("relays_url", "https://relays.example.net/list").unwrap();
        config.set("timeout_secs", "12").unwrap();
        config.set("output_format", "yaml").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.relays_url.as_deref(), Some("https://relays.example.net/list"));
        assert_eq!(loaded.timeout_secs, Some(12));
        assert_eq!(loaded.output_format, Some(OutputFormat::Yaml));
    }

    #[test]
    fn rejects_unknown_key_and_bad_timeout() {
        let mut config = Config::default();
        assert!(config.set("api_key", "x").is_err());
        assert!(config.set("timeout_secs", "soon").is_err());
    }

    #[test]
    fn rejects_zero_timeout() {
        let mut config = Config::default();
        let err = config.set("timeout_secs", "0").unwrap_err();
        assert!(err.to_string().contains("at least 1 second"));
        assert_eq!(config.timeout_secs, None);
    }

    #[test]
    fn explicit_store_path_wins() {
        let config = Config {
            store_path: Some(PathBuf::from("/srv/relaymap/servers.json")),
            ..Config::default()
        };
        assert_eq!(
            config.resolve_store_path().unwrap(),
            PathBuf::from("/srv/relaymap/servers.json")
        );
    }
}
