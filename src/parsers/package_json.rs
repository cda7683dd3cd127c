//! package.json parsing functionality
//!
//! Reads the project manifest at the scan root and extracts the dependency
//! and script sets used by the report. Parsing is all-or-nothing: a manifest
//! with any malformed section yields an error and no partial data.

use crate::error::{AnalyzerError, Result};
use crate::models::manifest::{DependencySet, ProjectManifest, ScriptSet};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Manifest file name looked up directly under the root
pub const MANIFEST_FILE: &str = "package.json";

/// Dependency sections merged into one set; later sections win on duplicates
const DEPENDENCY_SECTIONS: &[&str] = &["dependencies", "devDependencies"];

const SCRIPTS_SECTION: &str = "scripts";

/// Parser for package.json files
pub struct PackageJsonParser;

impl PackageJsonParser {
    /// Parse package.json content
    pub fn parse(content: &str) -> Result<ProjectManifest> {
        let json_value: Value = serde_json::from_str(content)
            .map_err(|e| AnalyzerError::json_parse_error(MANIFEST_FILE, e))?;

        let obj = match json_value {
            Value::Object(obj) => obj,
            _ => {
                return Err(AnalyzerError::invalid_manifest(
                    MANIFEST_FILE,
                    "Root value is not an object",
                ));
            }
        };

        let mut dependencies = DependencySet::new();
        for section in DEPENDENCY_SECTIONS {
            if let Some(entries) = Self::extract_string_map(&obj, section)? {
                for (name, version) in entries {
                    dependencies.insert(name, version);
                }
            }
        }

        let mut scripts = ScriptSet::new();
        if let Some(entries) = Self::extract_string_map(&obj, SCRIPTS_SECTION)? {
            for (name, command) in entries {
                scripts.insert(name, command);
            }
        }

        Ok(ProjectManifest {
            dependencies,
            scripts,
        })
    }

    /// Parse a package.json file from a path
    pub fn parse_file(path: &Path) -> Result<ProjectManifest> {
        let content = std::fs::read_to_string(path).map_err(|e| AnalyzerError::ManifestRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content).map_err(|e| match e {
            AnalyzerError::JsonParse { source, .. } => AnalyzerError::JsonParse {
                file: path.to_path_buf(),
                source,
            },
            AnalyzerError::InvalidManifest { message, .. } => AnalyzerError::InvalidManifest {
                path: path.to_path_buf(),
                message,
            },
            _ => e,
        })
    }

    /// Location of the manifest for a root directory
    pub fn manifest_path(root: &Path) -> PathBuf {
        root.join(MANIFEST_FILE)
    }

    /// Read the manifest under `root`
    ///
    /// Returns `Ok(None)` when there is no package.json at all.
    pub fn read_manifest(root: &Path) -> Result<Option<ProjectManifest>> {
        let path = Self::manifest_path(root);
        if !path.exists() {
            return Ok(None);
        }

        Self::parse_file(&path).map(Some)
    }

    /// Extract an optional `{ "name": "string" }` section in document order
    fn extract_string_map(
        obj: &Map<String, Value>,
        field: &str,
    ) -> Result<Option<Vec<(String, String)>>> {
        let section = match obj.get(field) {
            None => return Ok(None),
            Some(Value::Object(section)) => section,
            Some(other) => {
                return Err(AnalyzerError::invalid_manifest(
                    MANIFEST_FILE,
                    format!("Field '{}' must be an object, found {}", field, Self::kind_of(other)),
                ));
            }
        };

        let mut entries = Vec::with_capacity(section.len());
        for (key, value) in section {
            match value {
                Value::String(s) => entries.push((key.clone(), s.clone())),
                other => {
                    return Err(AnalyzerError::invalid_manifest(
                        MANIFEST_FILE,
                        format!(
                            "Value of '{}.{}' must be a string, found {}",
                            field,
                            key,
                            Self::kind_of(other)
                        ),
                    ));
                }
            }
        }

        Ok(Some(entries))
    }

    fn kind_of(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
            Value::Object(_) => "an object",
        }
    }
}
