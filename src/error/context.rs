//! Error context utilities
//!
//! Helpers for turning filesystem errors into analyzer errors and for
//! reporting recovered errors to the operator in a consistent way.

use crate::error::types::ErrorSeverity;
use crate::error::{AnalyzerError, Result};
use std::io::{self, Write};
use std::path::Path;

/// Convert a filesystem error into an analyzer error for `path`
///
/// Permission problems anywhere in the source chain become
/// `PermissionDenied`; everything else is a `DirectoryTraversal` error.
pub fn file_error<E, P>(err: E, path: P) -> AnalyzerError
where
    E: std::error::Error + 'static,
    P: AsRef<Path>,
{
    let err_ref: &(dyn std::error::Error + 'static) = &err;
    let permission_denied = std::iter::successors(Some(err_ref), |e| e.source())
        .filter_map(|e| e.downcast_ref::<std::io::Error>())
        .any(|io_err| io_err.kind() == std::io::ErrorKind::PermissionDenied);

    if permission_denied {
        AnalyzerError::permission_denied(path.as_ref())
    } else {
        AnalyzerError::directory_traversal_error(path.as_ref(), err.to_string())
    }
}

/// Print an error to stderr according to its severity without consuming it
pub fn report_error(err: &AnalyzerError) {
    let label = match err.severity() {
        ErrorSeverity::Warning => "Warning",
        ErrorSeverity::Error => "Error",
        ErrorSeverity::Critical => "Critical Error",
    };

    // Nothing useful can be done if stderr itself is gone
    let _ = writeln!(io::stderr().lock(), "{}: {}", label, err.user_message());
}

/// Handle an error based on its severity
///
/// - Warning: Log the error and return None
/// - Error: Log the error and return None
/// - Critical: Log the error and return Some(error)
pub fn handle_error(err: AnalyzerError) -> Option<AnalyzerError> {
    report_error(&err);

    if err.is_critical() {
        Some(err)
    } else {
        None
    }
}

/// Try to run a function and handle any errors based on their severity
///
/// Returns Ok(Some(T)) if the function succeeds, Ok(None) if a non-critical
/// error was logged, or Err if a critical error occurs.
pub fn try_with_recovery<T, F>(f: F) -> Result<Option<T>>
where
    F: FnOnce() -> Result<T>,
{
    match f() {
        Ok(value) => Ok(Some(value)),
        Err(err) => match handle_error(err) {
            Some(critical_err) => Err(critical_err),
            None => Ok(None),
        },
    }
}
