//! Configuration management for postura-checker
//!
//! Config stored at: ~/.config/postura-checker/config.json

use postura_types::{ConfigError, OutputFormat, PhotoType, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// View assumed when neither the CLI nor the point file names one
    #[serde(default)]
    pub default_view: Option<PhotoType>,

    /// Worker threads for batch assessment
    #[serde(default = "default_batch_jobs")]
    pub batch_jobs: usize,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_batch_jobs() -> usize {
    4
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            default_view: None,
            batch_jobs: default_batch_jobs(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::NotFound)?
            .join("postura-checker");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Postura Checker Configuration")?;
        writeln!(f, "=============================")?;
        writeln!(f)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(
            f,
            "Default view:   {}",
            self.default_view
                .map(|v| v.key().to_string())
                .unwrap_or_else(|| "(none)".to_string())
        )?;
        writeln!(f, "Batch jobs:     {}", self.batch_jobs)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
