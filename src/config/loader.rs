//! Configuration loading functionality
//!
//! This module contains functions for locating, loading and validating
//! configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use log::debug;
use serde_yaml::from_str;

use crate::constants::DEFAULT_CONFIG_FILE;
use crate::utils::find_project_folder;

use super::model::Config;

/// Loads a configuration from a file
///
/// # Arguments
/// * `file` - Path to the configuration file
///
/// # Errors
/// Returns an error if the file cannot be read or if the configuration is invalid
pub fn load_config(file: &Path) -> Result<Config> {
    let file_content = fs::read(file).map_err(|e| {
        anyhow!(
            "Failed to read configuration file {}: {}",
            file.display(),
            e
        )
    })?;

    let content_str = String::from_utf8(file_content).map_err(|e| {
        anyhow!(
            "Configuration file {} contains invalid UTF-8 characters: {}",
            file.display(),
            e
        )
    })?;

    load_config_from_str(&content_str).map_err(|e| {
        anyhow!(
            "Failed to load configuration file {}: {}",
            file.display(),
            e
        )
    })
}

/// Parses and validates a configuration from YAML text
///
/// An empty document yields the default configuration.
pub fn load_config_from_str(content: &str) -> Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    let config: Config = from_str(content)
        .map_err(|e| anyhow!("{}\nPlease check the YAML syntax.", e))?;

    config.validate()?;

    Ok(config)
}

/// Path of the configuration file in the platform configuration directory
pub fn default_config_path() -> Option<PathBuf> {
    find_project_folder()
        .ok()
        .map(|folder| folder.config_dir().join(DEFAULT_CONFIG_FILE))
}

/// Picks the configuration for a run
///
/// An explicitly given file must exist. Otherwise the file in the platform
/// configuration directory is used when present, and the built-in defaults
/// when it is not.
///
/// # Errors
/// Returns an error if the chosen file cannot be loaded
pub fn resolve_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        debug!("Loading configuration from {}", path.display());
        return load_config(path);
    }

    match default_config_path() {
        Some(path) if path.is_file() => {
            debug!("Loading configuration from {}", path.display());
            load_config(&path)
        }
        _ => {
            debug!("No configuration file found, using defaults");
            Ok(Config::default())
        }
    }
}
