//! Output writing functionality
//!
//! Writers for the report destinations: the report file and stdout.

use crate::error::{AnalyzerError, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Trait for output writers
pub trait OutputWriter {
    /// Write content to the output destination
    fn write(&self, content: &str) -> Result<()>;
}

/// Writer for stdout output
#[derive(Debug)]
pub struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write(&self, content: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", content)
            .and_then(|_| handle.flush())
            .map_err(|e| AnalyzerError::StdoutWrite { source: e })
    }
}

/// Writer for file output
#[derive(Debug)]
pub struct FileWriter {
    path: PathBuf,
}

impl FileWriter {
    /// Create a new file writer
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputWriter for FileWriter {
    fn write(&self, content: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(AnalyzerError::OutputDirectoryNotFound {
                    path: parent.to_path_buf(),
                });
            }
        }

        // The handle is closed when `file` drops, on success and on error
        let mut file =
            File::create(&self.path).map_err(|e| AnalyzerError::output_write_error(&self.path, e))?;

        file.write_all(content.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| AnalyzerError::output_write_error(&self.path, e))
    }
}

/// Create an output writer based on the output file option
pub fn create_writer(output_file: Option<impl AsRef<Path>>) -> Box<dyn OutputWriter> {
    match output_file {
        Some(path) => Box::new(FileWriter::new(path)),
        None => Box::new(StdoutWriter),
    }
}
