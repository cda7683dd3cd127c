//! Directory traversal against real temporary trees

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
use codebase_analyzer::{
    core::TreeScanner,
    models::config::{DEFAULT_ENTRY_POINTS, DEFAULT_IGNORE_DIRS},
};

fn default_scanner() -> TreeScanner {
    TreeScanner::new(DEFAULT_IGNORE_DIRS, DEFAULT_ENTRY_POINTS).unwrap()
}

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "").unwrap();
}

#[test]
fn test_ignored_directories_are_pruned() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    touch(root, "a.txt");
    touch(root, "b.txt");
    touch(root, "sub/c.md");
    touch(root, "node_modules/x.js");

    let outcome = default_scanner().scan(root);

    assert_eq!(outcome.statistics.total_files, 3);
    assert_eq!(outcome.statistics.count_for(".txt"), 2);
    assert_eq!(outcome.statistics.count_for(".md"), 1);
    assert_eq!(outcome.statistics.count_for(".js"), 0);
    assert!(outcome.errors.is_empty());
}

#[test]
fn test_ignored_names_match_at_any_depth() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    touch(root, "packages/web/node_modules/react/index.js");
    touch(root, "packages/web/dist/bundle.js");
    touch(root, "packages/web/src/index.ts");
    touch(root, ".git/HEAD");
    touch(root, "coverage/lcov.info");

    let outcome = default_scanner().scan(root);

    assert_eq!(outcome.statistics.total_files, 1);
    assert_eq!(
        outcome.entry_points,
        vec![PathBuf::from("packages").join("web").join("src").join("index.ts")]
    );
}

#[test]
fn test_ignored_name_on_a_file_is_still_counted() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    // Only directories are pruned by name
    touch(root, "build");
    touch(root, "dist");

    let outcome = default_scanner().scan(root);
    assert_eq!(outcome.statistics.total_files, 2);
    assert_eq!(outcome.statistics.count_for(""), 2);
}

#[test]
fn test_entry_points_found_in_every_directory() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    touch(root, "index.ts");
    touch(root, "server/server.ts");
    touch(root, "web/main.ts");
    touch(root, "web/app.ts");
    touch(root, "lib/index.jsx");

    let outcome = default_scanner().scan(root);

    let mut entry_points = outcome.entry_points.clone();
    entry_points.sort();
    assert_eq!(
        entry_points,
        vec![
            PathBuf::from("index.ts"),
            PathBuf::from("lib").join("index.jsx"),
            PathBuf::from("server").join("server.ts"),
            PathBuf::from("web").join("main.ts"),
        ]
    );
}

#[test]
fn test_custom_ignore_patterns() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    touch(root, "src/lib.rs");
    touch(root, "target/debug/app");
    touch(root, "pkg.egg-info/PKG-INFO");

    let scanner = TreeScanner::new(&["target", "*.egg-info"], DEFAULT_ENTRY_POINTS).unwrap();
    let outcome = scanner.scan(root);

    assert_eq!(outcome.statistics.total_files, 1);
    assert_eq!(outcome.statistics.count_for(".rs"), 1);
}

#[test]
fn test_scan_is_repeatable() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    for name in ["z.ts", "a.ts", "m/index.js", "b/main.ts", "c.json"] {
        touch(root, name);
    }

    let scanner = default_scanner();
    let first = scanner.scan(root);
    let second = scanner.scan(root);

    assert_eq!(first.statistics, second.statistics);
    assert_eq!(first.entry_points, second.entry_points);
}
