//! Validation of fully merged settings

use std::path::Path;

use crate::error::{AnalyzerError, Result};
use crate::models::config::Settings;

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        if !settings.scan_path.is_dir() {
            return Err(AnalyzerError::InvalidPath {
                path: settings.scan_path.clone(),
            });
        }

        for name in &settings.ignore_dirs {
            Self::validate_name("ignore_dirs", name)?;
            glob::Pattern::new(name).map_err(|e| {
                AnalyzerError::config_error(format!(
                    "Invalid ignore_dirs pattern '{}': {}",
                    name, e
                ))
            })?;
        }

        for name in &settings.entry_point_names {
            Self::validate_name("entry_point_names", name)?;
        }

        if settings.max_depth == Some(0) {
            return Err(AnalyzerError::config_error("Max depth must be at least 1"));
        }

        if settings.top_dependencies == 0 {
            return Err(AnalyzerError::config_error(
                "Number of listed dependencies must be at least 1",
            ));
        }

        Self::validate_output_path(&settings.report_path())
    }

    /// Entries are matched against a single path component
    fn validate_name(field: &str, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(AnalyzerError::config_error(format!("Empty {} entry", field)));
        }

        if name.contains('/') || name.contains(std::path::MAIN_SEPARATOR) {
            return Err(AnalyzerError::config_error(format!(
                "{} entry '{}' must be a plain name, not a path",
                field, name
            )));
        }

        Ok(())
    }

    /// The report's directory has to exist before the scan starts
    fn validate_output_path(path: &Path) -> Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
                Err(AnalyzerError::OutputDirectoryNotFound {
                    path: parent.to_path_buf(),
                })
            }
            _ => Ok(()),
        }
    }
}
