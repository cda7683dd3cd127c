//! Progress reporting and console messages
//!
//! All console chatter goes through `ProgressReporter` so that quiet mode,
//! verbose mode and colors are handled in one place. The spinner draws to
//! stderr and is hidden automatically when stderr is not a terminal.

use crate::core::analyzer::AnalysisEvent;
use crate::models::config::Settings;
use ansi_term::Colour::{Green, Yellow};
use ansi_term::Style;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

/// Width of the separator printed between the banner and the echoed report
pub const SEPARATOR_WIDTH: usize = 30;

/// Progress reporter for an analysis run
pub struct ProgressReporter {
    quiet: bool,
    verbose: bool,
    use_colors: bool,
    spinner: ProgressBar,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool, verbose: bool, show_progress: bool, use_colors: bool) -> Self {
        let spinner = if quiet || !show_progress {
            ProgressBar::hidden()
        } else {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} [{elapsed_precise}] {pos} files {wide_msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner
        };

        Self {
            quiet,
            verbose,
            use_colors,
            spinner,
        }
    }

    /// Create a reporter matching the console settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.quiet, settings.verbose, settings.show_progress, settings.use_colors)
    }

    /// Start the scan spinner
    pub fn start(&self, operation: &str) {
        if self.quiet {
            return;
        }

        self.spinner.set_position(0);
        self.spinner.set_message(operation.to_string());
        self.spinner.enable_steady_tick(Duration::from_millis(100));
    }

    /// Stop the spinner and clear it from the terminal
    pub fn finish(&self) {
        self.spinner.finish_and_clear();
    }

    /// React to an analysis event
    pub fn handle_event(&self, event: &AnalysisEvent<'_>) {
        match event {
            AnalysisEvent::Started { root } => {
                self.print(&format!("Analyzing codebase at: {}...", root.display()));
            }
            AnalysisEvent::ManifestLoaded {
                path,
                dependencies,
                scripts,
            } => {
                self.print_verbose(&format!(
                    "Read {}: {} dependencies, {} scripts",
                    path.display(),
                    dependencies,
                    scripts
                ));
            }
            AnalysisEvent::ManifestMissing { path } => {
                self.print_verbose(&format!("No manifest at {}", path.display()));
            }
            AnalysisEvent::FileScanned { count, path } => {
                self.spinner.set_position(*count as u64);
                if self.verbose {
                    self.spinner.set_message(path.display().to_string());
                }
            }
            AnalysisEvent::Recovered { error, .. } => {
                self.print_warning(&error.user_message());
            }
            AnalysisEvent::Finished { total_files } => {
                self.finish();
                self.print_verbose(&format!("Scan finished: {} files", total_files));
            }
        }
    }

    /// Print a message (respects quiet mode)
    pub fn print(&self, message: &str) {
        if !self.quiet {
            self.emit(message);
        }
    }

    /// Print a verbose message (only in verbose mode)
    pub fn print_verbose(&self, message: &str) {
        if self.verbose && !self.quiet {
            self.emit(&self.paint(Style::new().dimmed(), message));
        }
    }

    /// Print a success message (respects quiet mode)
    pub fn print_success(&self, message: &str) {
        if !self.quiet {
            self.emit(&self.paint(Green.normal(), message));
        }
    }

    /// Print the separator line between the banner and the echoed report
    pub fn print_separator(&self) {
        self.print(&format!("\n{}\n", "=".repeat(SEPARATOR_WIDTH)));
    }

    /// Print a warning message (always printed, even in quiet mode)
    pub fn print_warning(&self, message: &str) {
        let label = self.paint(Yellow.bold(), "Warning:");
        self.spinner.suspend(|| {
            let _ = writeln!(io::stderr().lock(), "{} {}", label, message);
        });
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Write one line to stdout; a closed stdout is ignored
    fn emit(&self, line: &str) {
        self.spinner.suspend(|| {
            let _ = writeln!(io::stdout().lock(), "{}", line);
        });
    }

    fn paint(&self, style: Style, text: &str) -> String {
        if self.use_colors {
            style.paint(text).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Create a progress callback that forwards analysis events to a reporter
pub fn create_progress_callback(
    reporter: &ProgressReporter,
) -> impl FnMut(AnalysisEvent<'_>) + '_ {
    move |event| reporter.handle_event(&event)
}
