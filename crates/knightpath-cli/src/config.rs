//! CLI configuration

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use knightpath_core::limits::{
    validate_dimension, validate_max_depth, DEFAULT_DIMENSION, DEFAULT_MAX_DEPTH,
    RECOMMENDED_DIMENSIONS,
};

use crate::output::OutputFormat;

/// Get default config directory
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("knightpath")
}

/// Config file location, honoring an explicit override
pub fn config_file_path(override_path: Option<&Path>) -> PathBuf {
    override_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_config_dir().join("config.toml"))
}

/// Configuration for the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dimension: i32,
    pub max_depth: i32,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            max_depth: DEFAULT_MAX_DEPTH,
            format: OutputFormat::Table,
        }
    }
}

impl Config {
    /// Load from `path`; a missing or unreadable file yields the defaults
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("No config file at {:?}, using defaults", path);
            return Self::default();
        }

        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Could not read config file {:?}: {}", path, e);
                return Self::default();
            }
        };

        match toml::from_str(&text) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring invalid config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        tracing::debug!("Saved config to {:?}", path);
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["dimension", "max_depth", "format"]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "dimension" => Some(self.dimension.to_string()),
            "max_depth" => Some(self.max_depth.to_string()),
            "format" => Some(self.format.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "dimension" => {
                let dimension: i32 = value.parse()?;
                validate_dimension(dimension)?;
                if !RECOMMENDED_DIMENSIONS.contains(&dimension) {
                    tracing::warn!(
                        "Board dimension {} is outside the usual {}..={} range",
                        dimension,
                        RECOMMENDED_DIMENSIONS.start(),
                        RECOMMENDED_DIMENSIONS.end()
                    );
                }
                self.dimension = dimension;
            }
            "max_depth" => {
                let depth: i32 = value.parse()?;
                validate_max_depth(depth)?;
                self.max_depth = depth;
            }
            "format" => {
                self.format = OutputFormat::from_str(value, true)
                    .map_err(|e| anyhow::anyhow!("Invalid format '{}': {}", value, e))?;
            }
            _ => anyhow::bail!(
                "Unknown config key: {} (available: {})",
                key,
                Self::keys().join(", ")
            ),
        }
        Ok(())
    }
}
