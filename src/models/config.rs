//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory names whose whole subtree is skipped during a scan
pub const DEFAULT_IGNORE_DIRS: &[&str] =
    &[".git", "node_modules", "dist", "build", "coverage", ".gemini"];

/// File names that conventionally mark a program's starting module
pub const DEFAULT_ENTRY_POINTS: &[&str] =
    &["index.ts", "index.js", "index.jsx", "main.ts", "server.ts"];

/// Report file written to the working directory when no output file is given
pub const DEFAULT_REPORT_FILE: &str = "codebase_report.md";

/// Report file used for JSON output when no output file is given
pub const DEFAULT_JSON_REPORT_FILE: &str = "codebase_report.json";

/// Number of dependency names sampled in the report
pub const DEFAULT_TOP_DEPENDENCIES: usize = 5;

/// Main configuration settings for the analyzer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Root directory to analyze
    pub scan_path: PathBuf,

    /// Directory names (or glob patterns over names) pruned from the scan
    pub ignore_dirs: Vec<String>,

    /// File names reported as potential entry points
    pub entry_point_names: Vec<String>,

    /// Maximum directory depth to traverse
    pub max_depth: Option<usize>,

    /// Whether to follow symbolic links during directory traversal
    pub follow_links: bool,

    /// Report format
    pub output_format: OutputFormat,

    /// Report file path (defaults depend on the output format)
    pub output_file: Option<PathBuf>,

    /// Whether to print the report to stdout as well
    pub echo_report: bool,

    /// How many dependency names to list in the report
    pub top_dependencies: usize,

    /// Whether to suppress non-essential output
    pub quiet: bool,

    /// Whether to show detailed progress and debug information
    pub verbose: bool,

    /// Whether to use colors in console output
    pub use_colors: bool,

    /// Whether to show a progress spinner while scanning
    pub show_progress: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scan_path: PathBuf::from("."),
            ignore_dirs: DEFAULT_IGNORE_DIRS.iter().map(|s| s.to_string()).collect(),
            entry_point_names: DEFAULT_ENTRY_POINTS.iter().map(|s| s.to_string()).collect(),
            max_depth: None,
            follow_links: false,
            output_format: OutputFormat::Markdown,
            output_file: None,
            echo_report: true,
            top_dependencies: DEFAULT_TOP_DEPENDENCIES,
            quiet: false,
            verbose: false,
            use_colors: true,
            show_progress: true,
        }
    }
}

impl Settings {
    /// Settings with defaults for everything except the root directory
    pub fn for_path(scan_path: impl AsRef<Path>) -> Self {
        Self {
            scan_path: scan_path.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    /// Where the report is written
    pub fn report_path(&self) -> PathBuf {
        match &self.output_file {
            Some(path) => path.clone(),
            None => match self.output_format {
                OutputFormat::Markdown => PathBuf::from(DEFAULT_REPORT_FILE),
                OutputFormat::Json => PathBuf::from(DEFAULT_JSON_REPORT_FILE),
            },
        }
    }
}

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Markdown summary report
    Markdown,
    /// JSON document for programmatic consumption
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialSettings {
    pub scan_path: Option<PathBuf>,
    pub ignore_dirs: Option<Vec<String>>,
    pub entry_point_names: Option<Vec<String>>,
    pub max_depth: Option<usize>,
    pub follow_links: Option<bool>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub echo_report: Option<bool>,
    pub top_dependencies: Option<usize>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
    pub use_colors: Option<bool>,
    pub show_progress: Option<bool>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.scan_path.is_some() {
            self.scan_path = other.scan_path;
        }
        if other.ignore_dirs.is_some() {
            self.ignore_dirs = other.ignore_dirs;
        }
        if other.entry_point_names.is_some() {
            self.entry_point_names = other.entry_point_names;
        }
        if other.max_depth.is_some() {
            self.max_depth = other.max_depth;
        }
        if other.follow_links.is_some() {
            self.follow_links = other.follow_links;
        }
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
        if other.output_file.is_some() {
            self.output_file = other.output_file;
        }
        if other.echo_report.is_some() {
            self.echo_report = other.echo_report;
        }
        if other.top_dependencies.is_some() {
            self.top_dependencies = other.top_dependencies;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
        if other.use_colors.is_some() {
            self.use_colors = other.use_colors;
        }
        if other.show_progress.is_some() {
            self.show_progress = other.show_progress;
        }
    }

    /// Convert partial settings to full settings
    /// Uses defaults for any fields that are None
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(scan_path) = &self.scan_path {
            settings.scan_path = scan_path.clone();
        }
        if let Some(ignore_dirs) = &self.ignore_dirs {
            settings.ignore_dirs = ignore_dirs.clone();
        }
        if let Some(entry_point_names) = &self.entry_point_names {
            settings.entry_point_names = entry_point_names.clone();
        }
        if let Some(max_depth) = self.max_depth {
            settings.max_depth = Some(max_depth);
        }
        if let Some(follow_links) = self.follow_links {
            settings.follow_links = follow_links;
        }
        if let Some(output_format) = self.output_format {
            settings.output_format = output_format;
        }
        if let Some(output_file) = &self.output_file {
            settings.output_file = Some(output_file.clone());
        }
        if let Some(echo_report) = self.echo_report {
            settings.echo_report = echo_report;
        }
        if let Some(top_dependencies) = self.top_dependencies {
            settings.top_dependencies = top_dependencies;
        }
        if let Some(quiet) = self.quiet {
            settings.quiet = quiet;
        }
        if let Some(verbose) = self.verbose {
            settings.verbose = verbose;
        }
        if let Some(use_colors) = self.use_colors {
            settings.use_colors = use_colors;
        }
        if let Some(show_progress) = self.show_progress {
            settings.show_progress = show_progress;
        }

        settings
    }
}
