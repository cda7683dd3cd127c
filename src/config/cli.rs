//! Command-line argument configuration source

use std::path::PathBuf;

use super::ConfigSource;
use crate::cli::args::Args;
use crate::error::Result;
use crate::models::config::{OutputFormat, PartialSettings};

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    args: CliArgs,
}

/// Command-line arguments structure
///
/// Flags that were not given stay unset so lower layers can supply them.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub path: Option<PathBuf>,
    pub ignore: Option<Vec<String>>,
    pub entry_points: Option<Vec<String>>,
    pub max_depth: Option<usize>,
    pub follow_links: bool,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub top_dependencies: Option<usize>,
    pub no_echo: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub no_colors: bool,
    pub no_progress: bool,
    pub config: Option<PathBuf>,
}

impl CliConfig {
    /// Create a new CLI configuration source
    pub fn new(args: CliArgs) -> Self {
        Self { args }
    }
}

impl From<&Args> for CliArgs {
    fn from(args: &Args) -> Self {
        let non_empty = |values: &Vec<String>| {
            if values.is_empty() {
                None
            } else {
                Some(values.clone())
            }
        };

        CliArgs {
            path: args.path.clone(),
            ignore: non_empty(&args.ignore),
            entry_points: non_empty(&args.entry_point),
            max_depth: args.max_depth,
            follow_links: args.follow_links,
            output_format: args.output.map(OutputFormat::from),
            output_file: args.output_file.clone(),
            top_dependencies: args.top,
            no_echo: args.no_echo,
            quiet: args.quiet,
            verbose: args.verbose,
            no_colors: args.no_colors,
            no_progress: args.no_progress,
            config: args.config.clone(),
        }
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings::default();

        if let Some(path) = &self.args.path {
            settings.scan_path = Some(path.clone());
        }

        if let Some(ignore) = &self.args.ignore {
            settings.ignore_dirs = Some(ignore.clone());
        }

        if let Some(entry_points) = &self.args.entry_points {
            settings.entry_point_names = Some(entry_points.clone());
        }

        settings.max_depth = self.args.max_depth;
        settings.output_format = self.args.output_format;

        if let Some(output_file) = &self.args.output_file {
            settings.output_file = Some(output_file.clone());
        }

        settings.top_dependencies = self.args.top_dependencies;

        // Boolean flags only ever override in one direction
        if self.args.follow_links {
            settings.follow_links = Some(true);
        }

        if self.args.no_echo {
            settings.echo_report = Some(false);
        }

        if self.args.quiet {
            settings.quiet = Some(true);
        }

        if self.args.verbose {
            settings.verbose = Some(true);
        }

        if self.args.no_colors {
            settings.use_colors = Some(false);
        }

        if self.args.no_progress {
            settings.show_progress = Some(false);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        true
    }
}
