//! Tool configuration read from `envreport.toml`

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::dotenv::Loader;

/// Default name of the configuration file
pub const CONFIG_FILE: &str = "envreport.toml";

/// Configuration for loading the environment
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name of the dot-env file (default: ".env")
    pub env_file: Option<String>,
    /// Whether to look for the file in parent directories
    pub search_parents: Option<bool>,
    /// Whether file values replace variables already set in the process
    pub override_existing: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            env_file: Some(".env".to_string()),
            search_parents: Some(true),
            override_existing: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let content = fs::read_to_string(config_path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse TOML config")?;
        Ok(config)
    }

    /// Load `envreport.toml` from `dir` if it exists, defaults otherwise
    pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let path = dir.as_ref().join(CONFIG_FILE);
        if path.exists() {
            tracing::debug!("Loading config from {}", path.display());
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Build a loader, filling unset fields with defaults
    pub fn loader(&self) -> Loader {
        Loader::new()
            .file_name(self.env_file.clone().unwrap_or_else(|| ".env".to_string()))
            .search_parents(self.search_parents.unwrap_or(true))
            .override_existing(self.override_existing.unwrap_or(false))
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dotenv::Environment;
    use tempfile::TempDir;

    #[test]
    fn test_load_partial_config() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "env_file = \".env.local\"\nsearch_parents = false\n")?;

        let config = Config::load(&path)?;

        assert_eq!(config.env_file.as_deref(), Some(".env.local"));
        assert_eq!(config.search_parents, Some(false));
        assert_eq!(config.override_existing, None);

        Ok(())
    }

    #[test]
    fn test_discover_falls_back_to_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        assert_eq!(Config::discover(temp_dir.path())?, Config::default());

        fs::write(temp_dir.path().join(CONFIG_FILE), "override_existing = true\n")?;
        assert_eq!(
            Config::discover(temp_dir.path())?.override_existing,
            Some(true)
        );

        Ok(())
    }

    #[test]
    fn test_invalid_toml_is_an_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "env_file = [unterminated")?;

        assert!(Config::load(&path).is_err());

        Ok(())
    }

    #[test]
    fn test_loader_uses_config_values() -> Result<()> {
        let temp_dir = TempDir::new()?;
        fs::write(temp_dir.path().join("custom.env"), "MONGODB_URL=custom\n")?;

        let config = Config {
            env_file: Some("custom.env".to_string()),
            search_parents: None,
            override_existing: Some(true),
        };

        let (env, _) = config
            .loader()
            .start_dir(temp_dir.path())
            .load_onto(Environment::from_vars([("MONGODB_URL", "preset")]))?;

        assert_eq!(env.get("MONGODB_URL"), Some("custom"));

        Ok(())
    }

    #[test]
    fn test_round_trips_through_toml() -> Result<()> {
        let rendered = Config::default().to_toml()?;
        assert!(rendered.contains("env_file = \".env\""));
        assert_eq!(toml::from_str::<Config>(&rendered)?, Config::default());
        Ok(())
    }
}
