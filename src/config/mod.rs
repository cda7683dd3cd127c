//! Configuration management
//!
//! Settings are layered: built-in defaults, then a TOML config file, then
//! `CODEBASE_ANALYZER_*` environment variables, then command-line flags.

pub mod cli;
pub mod file;
pub mod parser;
pub mod settings;

use crate::error::Result;
use crate::models::config::{PartialSettings, Settings};

pub use cli::{CliArgs, CliConfig};
pub use file::{EnvConfig, FileConfig, DEFAULT_CONFIG_FILE, ENV_PREFIX};
pub use parser::{
    create_default_config, find_default_config, find_default_config_in, parse_config_content,
    parse_config_file,
};
pub use settings::SettingsValidator;

/// Trait for configuration sources
pub trait ConfigSource {
    /// Load configuration from this source
    fn load(&self) -> Result<PartialSettings>;

    /// Check if this configuration source is available
    fn is_available(&self) -> bool;
}

/// Configuration builder for merging multiple sources
pub struct ConfigBuilder {
    partial: PartialSettings,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            partial: PartialSettings::default(),
        }
    }

    /// Merge settings from a partial configuration
    pub fn merge(mut self, partial: PartialSettings) -> Self {
        self.partial.merge_from(partial);
        self
    }

    /// Load and merge settings from a configuration source
    pub fn load_from<S: ConfigSource>(self, source: &S) -> Result<Self> {
        if source.is_available() {
            let partial = source.load()?;
            Ok(self.merge(partial))
        } else {
            Ok(self)
        }
    }

    /// Add configuration from a file
    pub fn add_config_file(self, path: &std::path::Path) -> Result<Self> {
        // An explicitly requested file must exist
        let partial = FileConfig::with_path(path).load()?;
        Ok(self.merge(partial))
    }

    /// Add configuration from the first default config file found
    pub fn add_default_config_file(self) -> Result<Self> {
        match parser::find_default_config()? {
            Some(default_config) => Ok(self.merge(default_config)),
            None => Ok(self),
        }
    }

    /// Build the final settings with validation
    pub fn build(self) -> Result<Settings> {
        let settings = self.partial.to_settings();
        SettingsValidator::validate(&settings)?;
        Ok(settings)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Load configuration from every source with proper precedence handling
pub fn load_config(cli_args: CliArgs) -> Result<Settings> {
    load_config_with_env_prefix(cli_args, ENV_PREFIX)
}

/// Load configuration with a custom environment variable prefix
pub fn load_config_with_env_prefix(cli_args: CliArgs, env_prefix: &str) -> Result<Settings> {
    let mut builder = ConfigBuilder::new();

    builder = match &cli_args.config {
        Some(path) => builder.add_config_file(path)?,
        None => builder.add_default_config_file()?,
    };

    let env_config = EnvConfig::new(env_prefix);
    builder = builder.load_from(&env_config)?;

    // Command-line flags have the highest priority
    let cli_config = CliConfig::new(cli_args);
    builder = builder.load_from(&cli_config)?;

    builder.build()
}
