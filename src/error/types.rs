//! Error types and definitions for the analyzer
//!
//! Every failure the analyzer can hit is a variant of [`AnalyzerError`]. Each
//! variant carries a severity so callers can decide whether to recover
//! (manifest and traversal problems) or abort (output problems).

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum ErrorSeverity {
    /// Warning level errors - operation can continue
    Warning,
    /// Error level - current operation fails but overall process can continue
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for analyzer operations
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// package.json exists but could not be read
    #[error("Error reading {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing errors with file context
    #[error("JSON parsing error in {file}: {source}")]
    JsonParse {
        file: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// package.json is valid JSON but not the expected shape
    #[error("Invalid package.json structure in {path}: {message}")]
    InvalidManifest { path: PathBuf, message: String },

    /// Permission denied errors
    #[error("Permission denied accessing {path}")]
    PermissionDenied { path: PathBuf },

    /// Invalid path errors
    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    /// Directory traversal errors
    #[error("Directory traversal error for {path}: {message}")]
    DirectoryTraversal { path: PathBuf, message: String },

    /// Glob pattern errors
    #[error("Glob pattern error: {source}")]
    GlobPattern {
        #[source]
        source: glob::PatternError,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Invalid output format
    #[error("Invalid output format: {format}")]
    InvalidOutputFormat { format: String },

    /// Report file write errors
    #[error("Error writing report to {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },

    /// Output directory not found
    #[error("Output directory not found: {path}")]
    OutputDirectoryNotFound { path: PathBuf },
}

impl AnalyzerError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Warning level errors - the run continues with defaults
            AnalyzerError::PermissionDenied { .. } => ErrorSeverity::Warning,
            AnalyzerError::DirectoryTraversal { .. } => ErrorSeverity::Warning,
            AnalyzerError::ManifestRead { .. } => ErrorSeverity::Warning,
            AnalyzerError::JsonParse { .. } => ErrorSeverity::Warning,
            AnalyzerError::InvalidManifest { .. } => ErrorSeverity::Warning,
            // The saved report is the deliverable, echoing it is best effort
            AnalyzerError::StdoutWrite { .. } => ErrorSeverity::Warning,

            // Critical errors - process should terminate
            AnalyzerError::Config { .. } => ErrorSeverity::Critical,
            AnalyzerError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            AnalyzerError::ConfigRead { .. } => ErrorSeverity::Critical,
            AnalyzerError::ConfigParse { .. } => ErrorSeverity::Critical,
            AnalyzerError::InvalidOutputFormat { .. } => ErrorSeverity::Critical,
            AnalyzerError::InvalidPath { .. } => ErrorSeverity::Critical,
            AnalyzerError::OutputWrite { .. } => ErrorSeverity::Critical,
            AnalyzerError::OutputDirectoryNotFound { .. } => ErrorSeverity::Critical,

            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            AnalyzerError::PermissionDenied { path } => {
                format!("Cannot access '{}' due to permission denied. Skipping it.", path.display())
            }
            AnalyzerError::ManifestRead { path, source } => {
                format!(
                    "Error reading package.json at '{}': {}",
                    path.display(),
                    source
                )
            }
            AnalyzerError::JsonParse { file, source } => {
                format!(
                    "Error reading package.json: invalid JSON in '{}': {}",
                    file.display(),
                    source
                )
            }
            AnalyzerError::InvalidManifest { path, message } => {
                format!("Error reading package.json: '{}' {}", path.display(), message)
            }
            AnalyzerError::Io { source } => {
                format!("File system error: {}. Check disk space and permissions.", source)
            }
            AnalyzerError::InvalidPath { path } => {
                format!(
                    "Invalid path: '{}'. Please provide a valid directory path.",
                    path.display()
                )
            }
            AnalyzerError::ConfigNotFound { path } => {
                format!(
                    "Configuration file not found at '{}'. \
                     Create one with --init or drop the --config option.",
                    path.display()
                )
            }
            AnalyzerError::OutputWrite { path, source } => {
                format!("Could not save the report to '{}': {}", path.display(), source)
            }
            AnalyzerError::OutputDirectoryNotFound { path } => {
                format!(
                    "Output directory '{}' does not exist. \
                     Please create the directory or specify a different output path.",
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }

    /// Suggest a fix for the most common fatal errors
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            AnalyzerError::InvalidPath { .. } => {
                Some("Check that the path exists and is a directory")
            }
            AnalyzerError::ConfigNotFound { .. } => Some(
                "Run with --init to create .codebase-analyzer.toml, \
                 or pass an existing file to --config",
            ),
            AnalyzerError::ConfigParse { .. } => {
                Some("Fix the TOML syntax or field names in the configuration file")
            }
            AnalyzerError::OutputWrite { .. } | AnalyzerError::OutputDirectoryNotFound { .. } => {
                Some("Run from a writable directory or choose another location with --output-file")
            }
            _ => None,
        }
    }

    /// Create an IO error with context
    pub fn io_error(source: std::io::Error) -> Self {
        AnalyzerError::Io { source }
    }

    /// Create a JSON parse error with file context
    pub fn json_parse_error(file: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        AnalyzerError::JsonParse {
            file: file.into(),
            source,
        }
    }

    /// Create an invalid manifest error
    pub fn invalid_manifest(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        AnalyzerError::InvalidManifest {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        AnalyzerError::Config {
            message: message.into(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        AnalyzerError::PermissionDenied { path: path.into() }
    }

    /// Create a directory traversal error
    pub fn directory_traversal_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        AnalyzerError::DirectoryTraversal {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an output write error
    pub fn output_write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AnalyzerError::OutputWrite {
            path: path.into(),
            source,
        }
    }
}

impl From<std::io::Error> for AnalyzerError {
    fn from(err: std::io::Error) -> Self {
        AnalyzerError::io_error(err)
    }
}

impl From<toml::de::Error> for AnalyzerError {
    fn from(err: toml::de::Error) -> Self {
        AnalyzerError::ConfigParse {
            path: PathBuf::from("<inline>"),
            source: err,
        }
    }
}

impl From<glob::PatternError> for AnalyzerError {
    fn from(err: glob::PatternError) -> Self {
        AnalyzerError::GlobPattern { source: err }
    }
}

impl From<serde_json::Error> for AnalyzerError {
    fn from(err: serde_json::Error) -> Self {
        AnalyzerError::JsonSerialize { source: err }
    }
}

/// Result type alias for analyzer operations
pub type Result<T> = std::result::Result<T, AnalyzerError>;
