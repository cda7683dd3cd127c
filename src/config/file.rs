//! Configuration file and environment sources

use std::path::{Path, PathBuf};

use super::{parser, ConfigSource};
use crate::error::{AnalyzerError, Result};
use crate::models::config::PartialSettings;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".codebase-analyzer.toml";

/// Prefix for configuration environment variables
pub const ENV_PREFIX: &str = "CODEBASE_ANALYZER";

/// Configuration file source
pub struct FileConfig {
    path: PathBuf,
}

impl FileConfig {
    /// Create a new file configuration source with a custom path
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the path of this configuration file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a default configuration file at this location
    pub fn create_default(&self) -> Result<()> {
        parser::create_default_config(&self.path)
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialSettings> {
        if !self.is_available() {
            return Err(AnalyzerError::ConfigNotFound {
                path: self.path.clone(),
            });
        }

        parser::parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        self.path.is_file()
    }
}

/// Environment variable configuration source
pub struct EnvConfig {
    prefix: String,
}

impl EnvConfig {
    /// Create a new environment variable configuration source
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn var(&self, suffix: &str) -> Option<String> {
        std::env::var(format!("{}_{}", self.prefix, suffix)).ok()
    }

    fn list(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    fn flag(&self, suffix: &str) -> Result<Option<bool>> {
        match self.var(suffix) {
            None => Ok(None),
            Some(value) => match value.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(Some(true)),
                "0" | "false" | "no" | "off" => Ok(Some(false)),
                other => Err(AnalyzerError::config_error(format!(
                    "{}_{} must be a boolean, got '{}'",
                    self.prefix, suffix, other
                ))),
            },
        }
    }

    fn number(&self, suffix: &str) -> Result<Option<usize>> {
        match self.var(suffix) {
            None => Ok(None),
            Some(value) => value.trim().parse().map(Some).map_err(|_| {
                AnalyzerError::config_error(format!(
                    "{}_{} must be a non-negative integer, got '{}'",
                    self.prefix, suffix, value
                ))
            }),
        }
    }
}

/// Variable suffixes read by `EnvConfig`
const ENV_KEYS: &[&str] = &[
    "SCAN_PATH",
    "IGNORE_DIRS",
    "ENTRY_POINTS",
    "MAX_DEPTH",
    "FOLLOW_LINKS",
    "OUTPUT_FORMAT",
    "OUTPUT_FILE",
    "TOP_DEPENDENCIES",
    "NO_COLOR",
];

impl ConfigSource for EnvConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings::default();

        if let Some(path) = self.var("SCAN_PATH") {
            settings.scan_path = Some(PathBuf::from(path));
        }
        if let Some(dirs) = self.var("IGNORE_DIRS") {
            settings.ignore_dirs = Some(Self::list(&dirs));
        }
        if let Some(names) = self.var("ENTRY_POINTS") {
            settings.entry_point_names = Some(Self::list(&names));
        }
        settings.max_depth = self.number("MAX_DEPTH")?;
        settings.follow_links = self.flag("FOLLOW_LINKS")?;
        if let Some(format) = self.var("OUTPUT_FORMAT") {
            let output_format = format
                .parse()
                .map_err(|_| AnalyzerError::InvalidOutputFormat { format })?;
            settings.output_format = Some(output_format);
        }
        if let Some(path) = self.var("OUTPUT_FILE") {
            settings.output_file = Some(PathBuf::from(path));
        }
        settings.top_dependencies = self.number("TOP_DEPENDENCIES")?;
        if let Some(no_color) = self.flag("NO_COLOR")? {
            settings.use_colors = Some(!no_color);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        ENV_KEYS.iter().any(|key| self.var(key).is_some())
    }
}
