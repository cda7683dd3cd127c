//! Directory tree scanning
//!
//! Walks a project root once, pruning ignored directories before descending
//! into them, and tallies file extensions and entry-point files on the way.
//! Unreadable branches are reported and skipped; they never abort the scan.

use crate::error::{file_error, AnalyzerError, Result};
use crate::models::config::Settings;
use crate::models::stats::FileStatistics;
use glob::Pattern;
use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Directory names excluded from the scan together with their subtrees
#[derive(Debug, Clone)]
pub struct IgnoreSet {
    patterns: Vec<Pattern>,
}

impl IgnoreSet {
    /// Compile directory names; glob metacharacters are honored
    pub fn new<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let patterns = names
            .iter()
            .map(|name| Pattern::new(name.as_ref()))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    /// Whether a directory with this name is pruned
    pub fn matches(&self, name: &OsStr) -> bool {
        let name = name.to_string_lossy();
        self.patterns.iter().any(|pattern| pattern.matches(&name))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Result of one scan
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub statistics: FileStatistics,
    /// Root-relative paths of entry-point files, in traversal order
    pub entry_points: Vec<PathBuf>,
    /// Branches that could not be read
    pub errors: Vec<(PathBuf, AnalyzerError)>,
}

/// Recursive file scanner for a project root
#[derive(Debug, Clone)]
pub struct TreeScanner {
    ignore: IgnoreSet,
    entry_point_names: HashSet<String>,
    max_depth: Option<usize>,
    follow_links: bool,
}

impl TreeScanner {
    /// Create a scanner with explicit ignore and entry-point name sets
    pub fn new<S: AsRef<str>, T: AsRef<str>>(
        ignore_dirs: &[S],
        entry_point_names: &[T],
    ) -> Result<Self> {
        Ok(Self {
            ignore: IgnoreSet::new(ignore_dirs)?,
            entry_point_names: entry_point_names.iter().map(|n| n.as_ref().to_string()).collect(),
            max_depth: None,
            follow_links: false,
        })
    }

    /// Create a scanner configured from settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self::new(&settings.ignore_dirs, &settings.entry_point_names)?
            .with_max_depth(settings.max_depth)
            .with_follow_links(settings.follow_links))
    }

    /// Limit how many directory levels below the root are visited
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Follow symbolic links to directories
    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    /// Whether a file name marks an entry point
    pub fn is_entry_point(&self, file_name: &str) -> bool {
        self.entry_point_names.contains(file_name)
    }

    /// Whether a directory with this name is pruned
    pub fn is_ignored_dir(&self, dir_name: &OsStr) -> bool {
        self.ignore.matches(dir_name)
    }

    /// Scan `root` and collect statistics
    pub fn scan(&self, root: &Path) -> ScanOutcome {
        self.scan_with_progress(root, |_, _| {})
    }

    /// Scan `root`, calling `progress` with the running file count and the
    /// path of each counted file
    pub fn scan_with_progress<F>(&self, root: &Path, mut progress: F) -> ScanOutcome
    where
        F: FnMut(usize, &Path),
    {
        let mut outcome = ScanOutcome::default();

        let mut walker = WalkDir::new(root)
            .follow_links(self.follow_links)
            .sort_by(|a, b| a.file_name().cmp(b.file_name()));
        if let Some(max_depth) = self.max_depth {
            walker = walker.max_depth(max_depth);
        }

        // Pruning here keeps ignored subtrees from ever being read. The root
        // itself is exempt even if its own name is in the ignore set.
        let entries = walker.into_iter().filter_entry(|entry| {
            !(entry.depth() > 0
                && entry.file_type().is_dir()
                && self.is_ignored_dir(entry.file_name()))
        });

        for entry in entries {
            match entry {
                Ok(entry) => {
                    if !Self::is_countable(&entry) {
                        continue;
                    }
                    self.record(root, &entry, &mut outcome);
                    progress(outcome.statistics.total_files, entry.path());
                }
                Err(err) => {
                    let path = err
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| root.to_path_buf());
                    let error = file_error(err, &path);
                    outcome.errors.push((path, error));
                }
            }
        }

        outcome
    }

    fn record(&self, root: &Path, entry: &DirEntry, outcome: &mut ScanOutcome) {
        let file_name = entry.file_name().to_string_lossy();
        outcome.statistics.record_file(&file_name);

        if self.is_entry_point(&file_name) {
            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            outcome.entry_points.push(relative.to_path_buf());
        }
    }

    /// Anything that is not a directory counts as a file. An unfollowed
    /// symlink counts unless it points at a directory.
    fn is_countable(entry: &DirEntry) -> bool {
        let file_type = entry.file_type();
        if file_type.is_dir() {
            return false;
        }
        !(file_type.is_symlink() && entry.path().is_dir())
    }
}
