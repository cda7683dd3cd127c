//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::models::config;

/// codebase-analyzer - quick structural summary of a JavaScript/TypeScript project
#[derive(Parser, Debug)]
#[command(name = "codebase-analyzer")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Summarize a project's file types, npm scripts, dependencies and entry points")]
#[command(long_about = "codebase-analyzer walks a project directory, counts files by extension, \
reads the root package.json for scripts and dependencies, and lists likely entry points. \
The summary is printed and saved to codebase_report.md in the current directory.")]
#[command(after_help = "EXAMPLES:

    # Analyze the current directory
    codebase-analyzer

    # Analyze another project
    codebase-analyzer ../my-app

    # Skip extra directories (replaces the default ignore list)
    codebase-analyzer --ignore node_modules --ignore .git --ignore target

    # Write a JSON report instead of Markdown
    codebase-analyzer --output json --output-file report.json

    # Save the report without printing it
    codebase-analyzer --no-echo --quiet

    # Create a default configuration file
    codebase-analyzer --init
")]
pub struct Args {
    /// Directory to analyze (defaults to the current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Directory names to skip, glob patterns allowed (repeatable, replaces the defaults)
    #[arg(short, long, value_name = "NAME")]
    pub ignore: Vec<String>,

    /// File names to report as entry points (repeatable, replaces the defaults)
    #[arg(short, long, value_name = "NAME")]
    pub entry_point: Vec<String>,

    /// Maximum directory depth to traverse
    #[arg(long, value_name = "DEPTH")]
    pub max_depth: Option<usize>,

    /// Follow symbolic links during directory traversal
    #[arg(long)]
    pub follow_links: bool,

    /// Report format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Report file path (defaults to codebase_report.md, or .json for JSON output)
    #[arg(long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Number of dependency names listed in the report
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Save the report without printing it to stdout
    #[arg(long)]
    pub no_echo: bool,

    /// Suppress the banner and status messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Show detailed progress and a summary after the scan
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_colors: bool,

    /// Disable the progress spinner
    #[arg(long)]
    pub no_progress: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Create a default configuration file (.codebase-analyzer.toml) in the current directory
    #[arg(long)]
    pub init: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Markdown report
    Markdown,
    /// JSON output for programmatic consumption
    Json,
}

impl From<OutputFormat> for config::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Markdown => config::OutputFormat::Markdown,
            OutputFormat::Json => config::OutputFormat::Json,
        }
    }
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["codebase-analyzer"]);
        assert!(args.path.is_none());
        assert!(args.ignore.is_empty());
        assert!(args.output.is_none());
        assert!(!args.init);
    }

    #[test]
    fn test_repeated_flags() {
        let args = Args::parse_from([
            "codebase-analyzer",
            "project",
            "-i",
            "target",
            "--ignore",
            "vendor",
            "-e",
            "app.ts",
            "--output",
            "json",
            "--top",
            "3",
        ]);

        assert_eq!(args.path, Some(PathBuf::from("project")));
        assert_eq!(args.ignore, vec!["target", "vendor"]);
        assert_eq!(args.entry_point, vec!["app.ts"]);
        assert_eq!(args.output, Some(OutputFormat::Json));
        assert_eq!(args.top, Some(3));
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Args::try_parse_from(["codebase-analyzer", "--output", "csv"]).is_err());
    }
}
