//! Binary end-to-end tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::process::Stdio;
use tempfile::tempdir;

fn analyzer_cmd() -> Command {
    let mut cmd = Command::cargo_bin("codebase-analyzer").unwrap();
    cmd.env_remove("CODEBASE_ANALYZER_OUTPUT_FORMAT")
        .env_remove("CODEBASE_ANALYZER_IGNORE_DIRS")
        .arg("--no-progress")
        .arg("--no-colors");
    cmd
}

#[test]
fn test_analyze_current_directory() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("a.txt"), "").unwrap();
    fs::create_dir(temp_dir.path().join("node_modules")).unwrap();
    fs::write(temp_dir.path().join("node_modules/x.js"), "").unwrap();

    analyzer_cmd()
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Analyzing codebase at: "))
        .stdout(predicate::str::contains("=".repeat(30)))
        .stdout(predicate::str::contains("- **Total Files**: 1"))
        .stdout(predicate::str::contains("Report saved to codebase_report.md"));

    let saved = fs::read_to_string(temp_dir.path().join("codebase_report.md")).unwrap();
    assert!(saved.starts_with("# Codebase Analysis Report"));
    assert!(saved.contains("- `.txt`: 1"));
    assert!(!saved.contains(".js"));
}

#[test]
fn test_analyze_path_argument_with_output_file() {
    let project = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    fs::write(
        project.path().join("package.json"),
        r#"{"dependencies":{"x":"1.0"},"scripts":{"build":"tsc"}}"#,
    )
    .unwrap();
    let report_path = out_dir.path().join("summary.md");

    analyzer_cmd()
        .arg(project.path())
        .arg("--output-file")
        .arg(&report_path)
        .arg("--no-echo")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Codebase Analysis Report").not());

    let saved = fs::read_to_string(&report_path).unwrap();
    assert!(saved.contains("- `build`: `tsc`"));
    assert!(saved.contains("- x"));
}

#[test]
fn test_quiet_mode_still_echoes_report() {
    let temp_dir = tempdir().unwrap();

    analyzer_cmd()
        .current_dir(temp_dir.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("No dependencies found."))
        .stdout(predicate::str::contains("Analyzing codebase at").not())
        .stdout(predicate::str::contains("Report saved").not());

    assert!(temp_dir.path().join("codebase_report.md").exists());
}

#[test]
fn test_json_output() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("index.ts"), "").unwrap();

    analyzer_cmd()
        .current_dir(temp_dir.path())
        .args(["--output", "json", "--quiet", "--no-echo"])
        .assert()
        .success();

    let saved = fs::read_to_string(temp_dir.path().join("codebase_report.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(parsed["entry_points"][0], "index.ts");
}

#[test]
fn test_missing_path_exits_critical() {
    let temp_dir = tempdir().unwrap();

    analyzer_cmd()
        .current_dir(temp_dir.path())
        .arg(temp_dir.path().join("absent"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid path"));

    assert!(!temp_dir.path().join("codebase_report.md").exists());
}

#[test]
fn test_missing_output_directory_exits_critical() {
    let temp_dir = tempdir().unwrap();

    analyzer_cmd()
        .current_dir(temp_dir.path())
        .arg("--output-file")
        .arg(temp_dir.path().join("missing").join("report.md"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_init_writes_config_once() {
    let temp_dir = tempdir().unwrap();

    analyzer_cmd()
        .current_dir(temp_dir.path())
        .arg("--init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created default configuration file"));

    let config_path = temp_dir.path().join(".codebase-analyzer.toml");
    assert!(config_path.exists());

    analyzer_cmd()
        .current_dir(temp_dir.path())
        .arg("--init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn test_config_file_in_working_directory_is_used() {
    let temp_dir = tempdir().unwrap();
    fs::write(
        temp_dir.path().join(".codebase-analyzer.toml"),
        "output_file = \"custom.md\"\n",
    )
    .unwrap();

    analyzer_cmd()
        .current_dir(temp_dir.path())
        .arg("--quiet")
        .assert()
        .success();

    assert!(temp_dir.path().join("custom.md").exists());
    assert!(!temp_dir.path().join("codebase_report.md").exists());
}

#[test]
fn test_report_saved_when_stdout_closed() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("index.ts"), "").unwrap();

    let mut child = std::process::Command::new(assert_cmd::cargo::cargo_bin("codebase-analyzer"))
        .current_dir(temp_dir.path())
        .env_remove("CODEBASE_ANALYZER_OUTPUT_FORMAT")
        .env_remove("CODEBASE_ANALYZER_OUTPUT_FILE")
        .args(["--no-progress", "--no-colors"])
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    // Reader goes away before the binary writes anything
    drop(child.stdout.take());
    let status = child.wait().unwrap();

    assert!(status.success());
    let saved = fs::read_to_string(temp_dir.path().join("codebase_report.md")).unwrap();
    assert!(saved.contains("index.ts"));
}
