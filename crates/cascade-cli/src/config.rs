//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use cascade::{CascadeError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for CascadeError {
    fn from(err: ConfigError) -> Self {
        CascadeError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (cascade/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Arguments
///
/// * `explicit_path` - Optional explicit path to config file
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed or fails validation
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, CascadeError> {
    // 1. Try the explicitly provided path first if available
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    // 2. Try the local project directory
    let local_config = Path::new("cascade/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    // 3. Try the platform-specific config directory
    if let Some(proj_dirs) = ProjectDirs::from("com", "cascade", "cascade") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    // 4. If no config is found, return default config
    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load and validate configuration from a TOML file
///
/// # Errors
///
/// Returns error if:
/// - File doesn't exist
/// - File cannot be read
/// - TOML parsing fails
/// - The layout section holds invalid values
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, CascadeError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    config
        .layout()
        .validate()
        .map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write config");
        file
    }

    #[test]
    fn test_load_partial_config_keeps_defaults() {
        let file = write_config("[layout]\nlayer_offset_unit = 18.0\n");

        let config = load_config(Some(file.path())).expect("config should load");
        assert_eq!(config.layout().layer_offset_unit(), 18.0);
        assert_eq!(config.layout().max_visible_layers(), 5);
        assert_eq!(config.layout().base_z_index(), 10);
    }

    #[test]
    fn test_load_empty_config() {
        let file = write_config("");
        let config = load_config(Some(file.path())).expect("config should load");
        assert_eq!(config.layout().max_visible_layers(), 5);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let err = load_config(Some("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, CascadeError::Config(ref msg) if msg.contains("Missing")));
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let file = write_config("[layout\n");
        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, CascadeError::Config(ref msg) if msg.contains("parse")));
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let file = write_config("[layout]\nlayer_offset_unit = -4.0\n");
        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, CascadeError::Config(ref msg) if msg.contains("Validation")));
    }
}
