//! Report rendering
//!
//! The markdown report is a pure function of the analysis results: same
//! results, same bytes. Sections always appear in this order: title, project
//! structure, key configurations, dependencies, potential entry points.

use crate::error::{AnalyzerError, Result};
use crate::models::analysis::AnalysisResults;
use crate::models::stats::FileTypeCount;
use ansi_term::Colour::{Cyan, Green, Yellow};
use ansi_term::Style;

pub const REPORT_TITLE: &str = "# Codebase Analysis Report";
pub const NO_SCRIPTS: &str = "No NPM scripts found.";
pub const NO_DEPENDENCIES: &str = "No dependencies found.";
pub const NO_ENTRY_POINTS: &str = "No standard entry points (index/main) found.";

/// Label used for files without an extension
pub const NO_EXTENSION_LABEL: &str = "(no extension)";

/// Render the markdown report
pub fn format_report_markdown(results: &AnalysisResults, top_dependencies: usize) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("{}\n", REPORT_TITLE));
    push_project_structure(&mut lines, results);
    push_key_configurations(&mut lines, results);
    push_dependencies(&mut lines, results, top_dependencies);
    push_entry_points(&mut lines, results);

    lines.join("\n")
}

fn push_project_structure(lines: &mut Vec<String>, results: &AnalysisResults) {
    lines.push("## Project Structure".to_string());
    lines.push(format!("- **Root**: `{}`", results.root.display()));
    lines.push(format!("- **Total Files**: {}", results.statistics.total_files));
    lines.push("\n**File Types:**".to_string());

    for file_type in results.statistics.by_count_desc() {
        lines.push(format!("- `{}`: {}", extension_label(file_type), file_type.count));
    }
}

fn push_key_configurations(lines: &mut Vec<String>, results: &AnalysisResults) {
    lines.push("\n## Key Configurations".to_string());

    let scripts = &results.manifest.scripts;
    if scripts.is_empty() {
        lines.push(NO_SCRIPTS.to_string());
        return;
    }

    lines.push("**NPM Scripts:**".to_string());
    for script in scripts.iter() {
        lines.push(format!("- `{}`: `{}`", script.name, script.command));
    }
}

fn push_dependencies(lines: &mut Vec<String>, results: &AnalysisResults, top_dependencies: usize) {
    lines.push("\n## Dependencies".to_string());

    let dependencies = &results.manifest.dependencies;
    if dependencies.is_empty() {
        lines.push(NO_DEPENDENCIES.to_string());
        return;
    }

    lines.push(format!(
        "Found {} dependencies. Top {}:",
        dependencies.len(),
        top_dependencies
    ));
    for name in dependencies.first_names(top_dependencies) {
        lines.push(format!("- {}", name));
    }
}

fn push_entry_points(lines: &mut Vec<String>, results: &AnalysisResults) {
    lines.push("\n## Potential Entry Points".to_string());

    if results.entry_points.is_empty() {
        lines.push(NO_ENTRY_POINTS.to_string());
        return;
    }

    for entry_point in &results.entry_points {
        lines.push(format!("- `{}`", entry_point.display()));
    }
}

fn extension_label(file_type: &FileTypeCount) -> &str {
    if file_type.extension.is_empty() {
        NO_EXTENSION_LABEL
    } else {
        &file_type.extension
    }
}

/// Render the results as pretty-printed JSON
pub fn format_results_json(results: &AnalysisResults) -> Result<String> {
    serde_json::to_string_pretty(results).map_err(|e| AnalyzerError::JsonSerialize { source: e })
}

/// One-paragraph console summary printed after a run
pub fn format_console_summary(results: &AnalysisResults, use_colors: bool) -> String {
    let mut output = String::new();

    let heading = "Analysis Summary:";
    if use_colors {
        output.push_str(&format!("{}\n", Style::new().bold().paint(heading)));
    } else {
        output.push_str(&format!("{}\n", heading));
    }

    let files = results.statistics.total_files.to_string();
    let file_types = results.statistics.distinct_extensions().to_string();
    let dependencies = results.manifest.dependencies.len().to_string();
    let entry_points = results.entry_points.len().to_string();

    let rows = [
        ("Total files", files),
        ("File types", file_types),
        ("Dependencies", dependencies),
        ("Entry points", entry_points),
    ];
    for (label, value) in rows.iter() {
        if use_colors {
            output.push_str(&format!("  {}: {}\n", label, Cyan.paint(value.as_str())));
        } else {
            output.push_str(&format!("  {}: {}\n", label, value));
        }
    }

    if !results.errors.is_empty() {
        let line = format!("  Recovered errors: {}", results.errors.len());
        if use_colors {
            output.push_str(&format!("{}\n", Yellow.paint(line)));
        } else {
            output.push_str(&format!("{}\n", line));
        }
    }

    let duration = format!("  Scan time: {:.2?}", results.scan_duration);
    if use_colors {
        output.push_str(&format!("{}\n", Green.paint(duration)));
    } else {
        output.push_str(&format!("{}\n", duration));
    }

    output
}
