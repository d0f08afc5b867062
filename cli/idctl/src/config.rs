//! Configuration loading.
//!
//! Settings come from `config.json` in the platform config directory, then
//! `IDCTL_*` environment variables, then command-line flags.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

const FORMAT_ENV: &str = "IDCTL_FORMAT";
const LOG_LEVEL_ENV: &str = "IDCTL_LOG_LEVEL";

/// Get the config file path.
pub fn config_path() -> Result<PathBuf> {
    ProjectDirs::from("com", "tenant", "idctl")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Default log filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load config from disk (or defaults) and apply environment overrides.
    pub fn load() -> Result<Self> {
        let path = config_path()?;

        let mut config = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config from {:?}", path))?;
            Self::from_json(&contents)
                .with_context(|| format!("Failed to parse config from {:?}", path))?
        } else {
            Self::default()
        };

        config.apply_overrides(
            std::env::var(FORMAT_ENV).ok().as_deref(),
            std::env::var(LOG_LEVEL_ENV).ok().as_deref(),
        )?;
        Ok(config)
    }

    /// Parse a config document; missing keys take their defaults.
    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Apply overrides, ignoring blank values.
    pub fn apply_overrides(
        &mut self,
        format: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<()> {
        if let Some(format) = format.filter(|s| !s.trim().is_empty()) {
            self.format = format
                .parse::<OutputFormat>()
                .with_context(|| format!("Invalid {FORMAT_ENV}"))?;
        }
        if let Some(level) = log_level.filter(|s| !s.trim().is_empty()) {
            self.log_level = level.trim().to_string();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.log_level, "warn");
        assert_eq!(Config::from_json("{}").unwrap(), config);
    }

    #[test]
    fn test_from_json() {
        let config = Config::from_json(r#"{"format":"json","log_level":"debug"}"#).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, "debug");

        assert!(Config::from_json(r#"{"format":"yaml"}"#).is_err());
        assert!(Config::from_json("not json").is_err());
    }

    #[test]
    fn test_overrides() {
        let mut config = Config::default();
        config.apply_overrides(Some("json"), Some(" info ")).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, "info");

        config.apply_overrides(Some(""), None).unwrap();
        assert_eq!(config.format, OutputFormat::Json);

        assert!(config.apply_overrides(Some("xml"), None).is_err());
    }

    #[test]
    fn test_config_path_ends_with_file_name() {
        if let Ok(path) = config_path() {
            assert!(path.ends_with(CONFIG_FILE));
        }
    }
}
