//! Castpage configuration file handling

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "castpage.toml";

/// Top-level configuration (castpage.toml)
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct CastpageConfig {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Output format for rendered variables
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// A `:root { ... }` block
    #[default]
    Css,
    /// A flat JSON object
    Json,
}

/// Render defaults
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct RenderConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Preset used when no theme file is given
    #[serde(default = "default_preset")]
    pub preset: String,
}

fn default_preset() -> String {
    "minimal".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            preset: default_preset(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl CastpageConfig {
    /// Load configuration from a file or a directory containing castpage.toml.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join(CONFIG_FILE)
        } else {
            path.to_path_buf()
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
