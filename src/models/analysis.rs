//! Analysis result structures

use super::manifest::ProjectManifest;
use super::stats::FileStatistics;
use crate::error::{AnalyzerError, ErrorSeverity};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Everything gathered by one analysis run
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResults {
    /// Absolute root the scan started from
    pub root: PathBuf,
    pub statistics: FileStatistics,
    pub manifest: ProjectManifest,
    /// Root-relative paths of entry-point files, in traversal order
    pub entry_points: Vec<PathBuf>,
    /// Errors that were recovered from during the run
    pub errors: Vec<AnalysisError>,
    #[serde(skip)]
    pub scan_duration: Duration,
}

impl AnalysisResults {
    /// Create empty results for a root directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            statistics: FileStatistics::new(),
            manifest: ProjectManifest::default(),
            entry_points: Vec::new(),
            errors: Vec::new(),
            scan_duration: Duration::ZERO,
        }
    }

    /// Record a recovered error
    pub fn add_error(&mut self, path: PathBuf, error: &AnalyzerError) {
        self.errors.push(AnalysisError {
            path,
            error: error.user_message(),
            severity: error.severity(),
        });
    }

    /// Set the scan duration
    pub fn set_scan_duration(&mut self, duration: Duration) {
        self.scan_duration = duration;
    }

    pub fn total_files(&self) -> usize {
        self.statistics.total_files
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Errors at a given severity
    pub fn errors_with_severity(&self, severity: ErrorSeverity) -> Vec<&AnalysisError> {
        self.errors.iter().filter(|e| e.severity == severity).collect()
    }
}

/// Error that occurred and was recovered from during analysis
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisError {
    pub path: PathBuf,
    pub error: String,
    pub severity: ErrorSeverity,
}
