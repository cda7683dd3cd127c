//! Core functionality for directory scanning and codebase analysis

pub mod analyzer;
pub mod scanner;

pub use analyzer::{AnalysisEvent, Analyzer};
pub use scanner::{IgnoreSet, ScanOutcome, TreeScanner};
