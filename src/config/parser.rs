//! Configuration file parsing utilities

use std::fs;
use std::path::{Path, PathBuf};

use super::file::DEFAULT_CONFIG_FILE;
use crate::error::{AnalyzerError, Result};
use crate::models::config::PartialSettings;

/// Template written by `--init`; every key is commented out
const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("default_config.toml");

/// Parse a TOML configuration file into PartialSettings
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(AnalyzerError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| AnalyzerError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_config_content(&content, path)
}

/// Parse TOML configuration content into PartialSettings
pub fn parse_config_content<P: AsRef<Path>>(content: &str, path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    let settings: PartialSettings = toml::from_str(content).map_err(|e| AnalyzerError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    validate_partial_settings(&settings, path)?;

    Ok(settings)
}

/// Validate partial settings for obvious errors
pub fn validate_partial_settings<P: AsRef<Path>>(
    settings: &PartialSettings,
    path: P,
) -> Result<()> {
    let path = path.as_ref();
    let invalid = |message: String| AnalyzerError::Config {
        message: format!("{} in config file: {}", message, path.display()),
    };

    if let Some(scan_path) = &settings.scan_path {
        if scan_path.as_os_str().is_empty() {
            return Err(invalid("Invalid empty scan_path".to_string()));
        }
    }

    if let Some(names) = &settings.ignore_dirs {
        for name in names {
            if name.is_empty() {
                return Err(invalid("Empty ignore_dirs entry".to_string()));
            }

            glob::Pattern::new(name)
                .map_err(|e| invalid(format!("Invalid ignore_dirs pattern '{}': {}", name, e)))?;
        }
    }

    if let Some(names) = &settings.entry_point_names {
        if names.iter().any(|name| name.is_empty()) {
            return Err(invalid("Empty entry_point_names entry".to_string()));
        }
    }

    if settings.max_depth == Some(0) {
        return Err(invalid("Invalid max_depth 0 (must be at least 1)".to_string()));
    }

    if settings.top_dependencies == Some(0) {
        return Err(invalid("Invalid top_dependencies 0 (must be at least 1)".to_string()));
    }

    if let Some(output_file) = &settings.output_file {
        if output_file.as_os_str().is_empty() {
            return Err(invalid("Invalid empty output_file".to_string()));
        }
    }

    Ok(())
}

/// Candidate configuration files, in lookup order, for a working directory
pub fn default_config_candidates<P: AsRef<Path>>(dir: P) -> Vec<PathBuf> {
    let mut candidates = vec![dir.as_ref().join(DEFAULT_CONFIG_FILE)];

    if let Some(home_dir) = dirs::home_dir() {
        candidates.push(home_dir.join(DEFAULT_CONFIG_FILE));
    }

    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("codebase-analyzer").join("config.toml"));
    }

    candidates
}

/// Find and load configuration from default locations
pub fn find_default_config() -> Result<Option<PartialSettings>> {
    find_default_config_in(Path::new("."))
}

/// Find and load configuration, looking in `dir` before the user locations
pub fn find_default_config_in<P: AsRef<Path>>(dir: P) -> Result<Option<PartialSettings>> {
    match default_config_candidates(dir).into_iter().find(|path| path.is_file()) {
        Some(path) => Ok(Some(parse_config_file(path)?)),
        None => Ok(None),
    }
}

/// Create a default configuration file at the specified path
pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(AnalyzerError::io_error)?;
        }
    }

    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(|e| AnalyzerError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
