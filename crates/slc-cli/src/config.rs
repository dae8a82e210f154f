//! Configuration file loading for the CLI
//!
//! This module defines the [`AppConfig`] read from TOML and handles finding
//! it in the usual locations (explicit path, local directory, system
//! directory).
//!
//! ```toml
//! [check]
//! enforce_filename = true
//! lint = true
//!
//! [output]
//! format = "json"
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use directories::ProjectDirs;
use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use crate::error::SlcError;

/// Application configuration loaded from TOML file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Check configuration section
    #[serde(default)]
    pub check: CheckConfig,

    /// Output configuration section
    #[serde(default)]
    pub output: OutputConfig,
}

/// Check configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Require the list name to match the file name
    pub enforce_filename: bool,

    /// Report line lint warnings
    pub lint: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            enforce_filename: true,
            lint: true,
        }
    }
}

/// Output configuration section
#[derive(Debug, Default, Clone, Deserialize)]
pub struct OutputConfig {
    /// Format of `slc check` results
    #[serde(default)]
    pub format: OutputFormat,
}

/// How `slc check` prints its results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable summary
    #[default]
    Text,
    /// Machine readable JSON report
    Json,
}

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (slc/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, SlcError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("slc/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "slc", "slc") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, SlcError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    Ok(config)
}
