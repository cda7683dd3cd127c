//! Error handling for the analyzer
//!
//! Error types, result aliases, and error context utilities.

pub mod context;
pub mod types;

pub use context::{file_error, handle_error, report_error, try_with_recovery};
pub use types::{AnalyzerError, ErrorSeverity, Result};
