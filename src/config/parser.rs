//! Configuration file parsing utilities

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CountextError, Result};
use crate::models::config::PartialSettings;
use super::file::DEFAULT_CONFIG_FILE;
use log::debug;

/// Parse a TOML configuration file into PartialSettings
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(CountextError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| CountextError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_config_content(&content, path)
}

/// Parse TOML configuration content into PartialSettings
pub fn parse_config_content<P: AsRef<Path>>(content: &str, path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    let settings: PartialSettings = toml::from_str(content).map_err(|e| CountextError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    validate_partial_settings(&settings, path)?;

    Ok(settings)
}

/// Validate partial settings for obvious errors
pub fn validate_partial_settings<P: AsRef<Path>>(settings: &PartialSettings, path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(entries) = &settings.ignore {
        if entries.iter().any(|entry| entry.trim().is_empty()) {
            return Err(CountextError::config_error(format!(
                "Empty ignore entry in config file: {}",
                path.display()
            )));
        }
    }

    if settings.max_depth == Some(0) {
        return Err(CountextError::config_error(format!(
            "Invalid max_depth 0 in config file: {}. Must be at least 1.",
            path.display()
        )));
    }

    if let Some(output_file) = &settings.output_file {
        if output_file.as_os_str().is_empty() {
            return Err(CountextError::config_error(format!(
                "Invalid empty output_file in config file: {}",
                path.display()
            )));
        }
    }

    Ok(())
}

/// Candidate locations for an implicit configuration file, in lookup order
pub fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(DEFAULT_CONFIG_FILE)];

    if let Some(home_dir) = dirs::home_dir() {
        paths.push(home_dir.join(DEFAULT_CONFIG_FILE));
    }

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("countext").join("config.toml"));
    }

    paths
}

/// Load the first existing file among `candidates`
pub fn find_config_in(candidates: &[PathBuf]) -> Result<Option<PartialSettings>> {
    for candidate in candidates {
        if candidate.is_file() {
            debug!("using configuration file {}", candidate.display());
            return parse_config_file(candidate).map(Some);
        }
    }
    Ok(None)
}

/// Find and load configuration from default locations
pub fn find_default_config() -> Result<Option<PartialSettings>> {
    find_config_in(&default_config_paths())
}

/// Create a default configuration file at the specified path
pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, include_str!("default_config.toml"))?;

    Ok(())
}
