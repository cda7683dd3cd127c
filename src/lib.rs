//! codebase-analyzer - a quick structural summary of a JavaScript/TypeScript project
//!
//! This library walks a project tree, counts files by extension, reads the
//! root `package.json` for scripts and dependencies, spots conventional entry
//! point files, and renders the findings as a Markdown (or JSON) report.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod parsers;

// Re-export commonly used types
pub use error::{handle_error, try_with_recovery, AnalyzerError, ErrorSeverity, Result};
pub use models::{
    analysis::{AnalysisError, AnalysisResults},
    config::{OutputFormat, Settings},
    manifest::{DependencySet, ProjectManifest, ScriptSet},
    stats::FileStatistics,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
