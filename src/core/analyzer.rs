//! Codebase analysis orchestration
//!
//! Reads the manifest once, scans the tree once, and folds both into a single
//! `AnalysisResults`. Manifest and traversal failures are recovered here: they
//! are announced through the event callback as they happen, recorded in the
//! results, and replaced by empty data.

use crate::core::scanner::TreeScanner;
use crate::error::{report_error, AnalyzerError, Result};
use crate::models::analysis::AnalysisResults;
use crate::models::config::Settings;
use crate::parsers::package_json::PackageJsonParser;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Something that happened while analyzing, in the order it happened
#[derive(Debug)]
pub enum AnalysisEvent<'a> {
    /// Analysis of the resolved root has begun
    Started { root: &'a Path },
    /// package.json was read successfully
    ManifestLoaded {
        path: &'a Path,
        dependencies: usize,
        scripts: usize,
    },
    /// There is no package.json under the root
    ManifestMissing { path: &'a Path },
    /// A file was counted
    FileScanned { count: usize, path: &'a Path },
    /// A non-fatal error was recovered from
    Recovered { path: &'a Path, error: &'a AnalyzerError },
    /// The scan is complete
    Finished { total_files: usize },
}

/// Runs the manifest read and tree scan for one root directory
pub struct Analyzer {
    settings: Settings,
    scanner: TreeScanner,
}

impl Analyzer {
    /// Create an analyzer; fails if the ignore patterns do not compile
    pub fn new(settings: Settings) -> Result<Self> {
        let scanner = TreeScanner::from_settings(&settings)?;
        Ok(Self { settings, scanner })
    }

    /// Get the current settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Resolve the configured root to an absolute directory path
    pub fn resolve_root(path: &Path) -> Result<PathBuf> {
        let root = path.canonicalize().map_err(|_| AnalyzerError::InvalidPath {
            path: path.to_path_buf(),
        })?;

        if !root.is_dir() {
            return Err(AnalyzerError::InvalidPath {
                path: path.to_path_buf(),
            });
        }

        Ok(root)
    }

    /// Analyze the configured root, printing recovered errors to stderr
    pub fn analyze(&self) -> Result<AnalysisResults> {
        self.analyze_with_progress(|event| {
            if let AnalysisEvent::Recovered { error, .. } = event {
                report_error(error);
            }
        })
    }

    /// Analyze the configured root, reporting each step to `on_event`
    pub fn analyze_with_progress<F>(&self, mut on_event: F) -> Result<AnalysisResults>
    where
        F: FnMut(AnalysisEvent<'_>),
    {
        let start_time = Instant::now();

        // A missing root is the one input problem that cannot be recovered
        let root = Self::resolve_root(&self.settings.scan_path)?;
        let mut results = AnalysisResults::new(root.clone());
        on_event(AnalysisEvent::Started { root: &root });

        let manifest_path = PackageJsonParser::manifest_path(&root);
        match PackageJsonParser::read_manifest(&root) {
            Ok(Some(manifest)) => {
                on_event(AnalysisEvent::ManifestLoaded {
                    path: &manifest_path,
                    dependencies: manifest.dependencies.len(),
                    scripts: manifest.scripts.len(),
                });
                results.manifest = manifest;
            }
            Ok(None) => on_event(AnalysisEvent::ManifestMissing { path: &manifest_path }),
            Err(err) => {
                on_event(AnalysisEvent::Recovered {
                    path: &manifest_path,
                    error: &err,
                });
                results.add_error(manifest_path.clone(), &err);
            }
        }

        let outcome = self.scanner.scan_with_progress(&root, |count, path| {
            on_event(AnalysisEvent::FileScanned { count, path });
        });

        for (path, err) in &outcome.errors {
            on_event(AnalysisEvent::Recovered { path, error: err });
            results.add_error(path.clone(), err);
        }

        results.statistics = outcome.statistics;
        results.entry_points = outcome.entry_points;
        results.set_scan_duration(start_time.elapsed());

        on_event(AnalysisEvent::Finished {
            total_files: results.total_files(),
        });

        Ok(results)
    }
}
