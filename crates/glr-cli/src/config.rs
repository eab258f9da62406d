//! Configuration management for the CLI.
//!
//! The config file is the pipeline configuration (`[llm]`, `[extractor]`,
//! `[output]`) plus an optional `[settings]` table for display options.

use crate::error::{CliError, Result};
use glr_pipeline::PipelineConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Pipeline settings
    pub pipeline: PipelineConfig,

    /// Display settings
    pub settings: Settings,
}

/// Display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Enable colored output
    pub color: bool,

    /// Default output format
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
}

#[derive(Deserialize)]
struct SettingsSection {
    #[serde(default)]
    settings: Settings,
}

impl Config {
    /// Get the default configuration file path, if there is a home directory.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".glr").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one the default path is used if
    /// present, otherwise built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => Self::load_default(Self::path().as_deref()),
        }
    }

    fn load_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => Self::from_file(path),
            Some(path) => {
                tracing::debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => {
                tracing::debug!("No home directory, using default config");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        let config = Self::from_toml(&contents)?;

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let pipeline = PipelineConfig::from_toml(contents)?;
        let SettingsSection { settings } = toml::from_str(contents)?;
        Ok(Self { pipeline, settings })
    }
}
