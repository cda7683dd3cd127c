//! End-to-end analysis of small projects through the library API

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
use codebase_analyzer::{
    core::{AnalysisEvent, Analyzer},
    error::{AnalyzerError, ErrorSeverity, Result},
    models::config::Settings,
};

/// Create a small TypeScript service with a manifest and build output
fn create_service_project(base_dir: &Path) -> Result<()> {
    fs::create_dir_all(base_dir.join("src/routes"))?;
    fs::create_dir_all(base_dir.join("dist"))?;
    fs::create_dir_all(base_dir.join("node_modules/express"))?;

    fs::write(
        base_dir.join("package.json"),
        r#"{
            "name": "service",
            "version": "1.0.0",
            "scripts": {
                "build": "tsc",
                "start": "node dist/server.js"
            },
            "dependencies": {
                "express": "^4.18.0",
                "zod": "^3.22.0"
            },
            "devDependencies": {
                "typescript": "^5.3.0",
                "zod": "^3.23.0"
            }
        }"#,
    )?;

    fs::write(base_dir.join("src/server.ts"), "import express from 'express';")?;
    fs::write(base_dir.join("src/routes/users.ts"), "export {};")?;
    fs::write(base_dir.join("tsconfig.json"), "{}")?;
    fs::write(base_dir.join("dist/server.js"), "")?;
    fs::write(base_dir.join("node_modules/express/index.js"), "")?;

    Ok(())
}

#[test]
fn test_analyze_service_project() -> Result<()> {
    let temp_dir = tempdir().unwrap();
    create_service_project(temp_dir.path())?;

    let analyzer = Analyzer::new(Settings::for_path(temp_dir.path()))?;
    let results = analyzer.analyze()?;

    // package.json, tsconfig.json, server.ts, users.ts
    assert_eq!(results.total_files(), 4);
    assert_eq!(results.statistics.count_for(".ts"), 2);
    assert_eq!(results.statistics.count_for(".json"), 2);
    assert_eq!(results.statistics.count_for(".js"), 0);

    let scripts: Vec<_> = results
        .manifest
        .scripts
        .iter()
        .map(|s| (s.name.as_str(), s.command.as_str()))
        .collect();
    assert_eq!(scripts, vec![("build", "tsc"), ("start", "node dist/server.js")]);

    // devDependencies win on a clash but the first position is kept
    let names: Vec<_> = results.manifest.dependencies.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["express", "zod", "typescript"]);
    assert_eq!(results.manifest.dependencies.get("zod"), Some("^3.23.0"));

    assert_eq!(results.entry_points, vec![PathBuf::from("src").join("server.ts")]);
    assert!(!results.has_errors());
    assert_eq!(results.root, temp_dir.path().canonicalize().unwrap());

    Ok(())
}

#[test]
fn test_malformed_manifest_does_not_stop_the_scan() -> Result<()> {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("package.json"), "{ not json")?;
    fs::write(temp_dir.path().join("index.js"), "")?;

    let mut recovered = Vec::new();
    let analyzer = Analyzer::new(Settings::for_path(temp_dir.path()))?;
    let results = analyzer.analyze_with_progress(|event| {
        if let AnalysisEvent::Recovered { error, .. } = event {
            recovered.push(error.user_message());
        }
    })?;

    assert_eq!(results.total_files(), 2);
    assert!(results.manifest.is_empty());
    assert_eq!(results.entry_points, vec![PathBuf::from("index.js")]);

    assert_eq!(recovered.len(), 1);
    assert!(recovered[0].starts_with("Error reading package.json"));
    assert_eq!(results.errors_with_severity(ErrorSeverity::Warning).len(), 1);

    Ok(())
}

#[test]
fn test_wrongly_shaped_manifest_is_discarded_whole() -> Result<()> {
    let temp_dir = tempdir().unwrap();
    fs::write(
        temp_dir.path().join("package.json"),
        r#"{"scripts": {"build": "tsc"}, "dependencies": ["react"]}"#,
    )?;

    let results = Analyzer::new(Settings::for_path(temp_dir.path()))?.analyze()?;

    assert!(results.manifest.scripts.is_empty());
    assert!(results.manifest.dependencies.is_empty());
    assert!(results.has_errors());

    Ok(())
}

#[test]
fn test_missing_root_is_rejected() {
    let temp_dir = tempdir().unwrap();
    let settings = Settings::for_path(temp_dir.path().join("absent"));

    let err = Analyzer::new(settings).unwrap().analyze().unwrap_err();
    assert!(matches!(err, AnalyzerError::InvalidPath { .. }));
    assert!(err.is_critical());
}

#[test]
fn test_events_arrive_in_order() -> Result<()> {
    let temp_dir = tempdir().unwrap();
    create_service_project(temp_dir.path())?;

    let mut kinds = Vec::new();
    let analyzer = Analyzer::new(Settings::for_path(temp_dir.path()))?;
    analyzer.analyze_with_progress(|event| {
        let kind = match event {
            AnalysisEvent::Started { .. } => "started",
            AnalysisEvent::ManifestLoaded { .. } => "manifest",
            AnalysisEvent::ManifestMissing { .. } => "no-manifest",
            AnalysisEvent::FileScanned { .. } => "file",
            AnalysisEvent::Recovered { .. } => "recovered",
            AnalysisEvent::Finished { .. } => "finished",
        };
        kinds.push(kind);
    })?;

    assert_eq!(kinds.first(), Some(&"started"));
    assert_eq!(kinds.get(1), Some(&"manifest"));
    assert_eq!(kinds.iter().filter(|k| **k == "file").count(), 4);
    assert_eq!(kinds.last(), Some(&"finished"));

    Ok(())
}

#[test]
fn test_started_event_reports_resolved_root() -> Result<()> {
    let temp_dir = tempdir().unwrap();
    let relative = temp_dir.path().join("nested").join("..");
    fs::create_dir(temp_dir.path().join("nested"))?;

    let mut started: Option<PathBuf> = None;
    let analyzer = Analyzer::new(Settings::for_path(&relative))?;
    analyzer.analyze_with_progress(|event| {
        if let AnalysisEvent::Started { root } = event {
            started = Some(root.to_path_buf());
        }
    })?;

    assert_eq!(started, Some(temp_dir.path().canonicalize()?));
    Ok(())
}
