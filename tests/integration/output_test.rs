//! Reports rendered from real scans

use std::fs;
use tempfile::tempdir;
use codebase_analyzer::{
    core::Analyzer,
    models::config::Settings,
    output::{create_formatter, Formatter, MarkdownFormatter},
    OutputFormat,
};

#[test]
fn test_report_for_empty_directory() {
    let temp_dir = tempdir().unwrap();
    let results = Analyzer::new(Settings::for_path(temp_dir.path()))
        .unwrap()
        .analyze()
        .unwrap();

    let report = MarkdownFormatter::default().format(&results).unwrap();

    assert!(report.starts_with("# Codebase Analysis Report\n\n## Project Structure\n"));
    assert!(report.contains("- **Total Files**: 0\n\n**File Types:**\n\n## Key Configurations"));
    assert!(report.contains("No NPM scripts found."));
    assert!(report.contains("No dependencies found."));
    assert!(report
        .ends_with("## Potential Entry Points\nNo standard entry points (index/main) found."));
}

#[test]
fn test_report_for_small_project() {
    let temp_dir = tempdir().unwrap();
    fs::write(
        temp_dir.path().join("package.json"),
        r#"{"dependencies":{"x":"1.0"},"scripts":{"build":"tsc"}}"#,
    )
    .unwrap();

    let results = Analyzer::new(Settings::for_path(temp_dir.path()))
        .unwrap()
        .analyze()
        .unwrap();
    let report = MarkdownFormatter::default().format(&results).unwrap();

    assert!(report.contains("- `.json`: 1"));
    assert!(report.contains("**NPM Scripts:**\n- `build`: `tsc`"));
    assert!(report.contains("Found 1 dependencies. Top 5:\n- x"));
}

#[test]
fn test_report_is_identical_across_runs() {
    let temp_dir = tempdir().unwrap();
    fs::create_dir_all(temp_dir.path().join("src/components")).unwrap();
    for name in [
        "src/index.ts",
        "src/components/Button.tsx",
        "src/components/Card.tsx",
        "README.md",
    ] {
        fs::write(temp_dir.path().join(name), "").unwrap();
    }

    let render = || {
        let results = Analyzer::new(Settings::for_path(temp_dir.path()))
            .unwrap()
            .analyze()
            .unwrap();
        create_formatter(OutputFormat::Markdown, 5).format(&results).unwrap()
    };

    assert_eq!(render(), render());
}

#[test]
fn test_json_report_round_trips_through_serde() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("main.ts"), "").unwrap();

    let results = Analyzer::new(Settings::for_path(temp_dir.path()))
        .unwrap()
        .analyze()
        .unwrap();
    let output = create_formatter(OutputFormat::Json, 5).format(&results).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["statistics"]["total_files"], 1);
    assert_eq!(parsed["entry_points"][0], "main.ts");
    assert!(parsed["manifest"]["dependencies"].as_array().unwrap().is_empty());
}
