//! Output formatting and writing functionality

mod formatters;
mod progress;
mod writers;

pub use self::formatters::{
    format_console_summary, format_report_markdown, format_results_json, NO_DEPENDENCIES,
    NO_ENTRY_POINTS, NO_EXTENSION_LABEL, NO_SCRIPTS, REPORT_TITLE,
};
pub use self::progress::{create_progress_callback, ProgressReporter, SEPARATOR_WIDTH};
pub use self::writers::{create_writer, FileWriter, OutputWriter, StdoutWriter};

use crate::error::Result;
use crate::models::analysis::AnalysisResults;
use crate::models::config::{OutputFormat, DEFAULT_TOP_DEPENDENCIES};

/// Trait for different output formatters
pub trait Formatter {
    /// Format analysis results into a string
    fn format(&self, results: &AnalysisResults) -> Result<String>;
}

/// Markdown summary report
pub struct MarkdownFormatter {
    pub top_dependencies: usize,
}

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new(top_dependencies: usize) -> Self {
        Self { top_dependencies }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_DEPENDENCIES)
    }
}

impl Formatter for MarkdownFormatter {
    fn format(&self, results: &AnalysisResults) -> Result<String> {
        Ok(formatters::format_report_markdown(results, self.top_dependencies))
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, results: &AnalysisResults) -> Result<String> {
        formatters::format_results_json(results)
    }
}

/// Create a formatter based on the output format
pub fn create_formatter(format: OutputFormat, top_dependencies: usize) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(top_dependencies)),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
