//! File statistics gathered during a scan

use serde::Serialize;
use std::collections::HashMap;

/// Number of files seen with one extension
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileTypeCount {
    /// Extension including the leading dot, empty for extensionless files
    pub extension: String,
    pub count: usize,
}

/// Running totals for a scan
///
/// Extensions are kept in the order they were first seen so that the report
/// can break count ties by that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileStatistics {
    pub total_files: usize,
    file_types: Vec<FileTypeCount>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl FileStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one file with the given name
    pub fn record_file(&mut self, file_name: &str) {
        self.total_files += 1;
        self.record_extension(extension_of(file_name));
    }

    fn record_extension(&mut self, extension: &str) {
        match self.index.get(extension) {
            Some(&slot) => self.file_types[slot].count += 1,
            None => {
                self.index.insert(extension.to_string(), self.file_types.len());
                self.file_types.push(FileTypeCount {
                    extension: extension.to_string(),
                    count: 1,
                });
            }
        }
    }

    /// Count for an exact extension string
    pub fn count_for(&self, extension: &str) -> usize {
        self.index
            .get(extension)
            .map(|&slot| self.file_types[slot].count)
            .unwrap_or(0)
    }

    /// Extensions in first-seen order
    pub fn file_types(&self) -> &[FileTypeCount] {
        &self.file_types
    }

    /// Extensions by descending count; equal counts keep first-seen order
    pub fn by_count_desc(&self) -> Vec<&FileTypeCount> {
        let mut sorted: Vec<&FileTypeCount> = self.file_types.iter().collect();
        // sort_by is stable
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted
    }

    pub fn distinct_extensions(&self) -> usize {
        self.file_types.len()
    }
}

/// Extension of a file name: from the last `.` to the end, dot included.
///
/// Leading dots belong to the name, so `.gitignore` has no extension while
/// `.eslintrc.json` has `.json`. A trailing dot yields `"."`.
pub fn extension_of(file_name: &str) -> &str {
    let stem_start = file_name.len() - file_name.trim_start_matches('.').len();
    match file_name[stem_start..].rfind('.') {
        Some(dot) => &file_name[stem_start + dot..],
        None => "",
    }
}
