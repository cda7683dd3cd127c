//! package.json data extracted for the report
//!
//! Both sets keep the order in which keys appear in the manifest. The report
//! samples dependencies "in manifest order", so a sorted map would be wrong
//! here.

use serde::Serialize;

/// A single dependency entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyEntry {
    pub name: String,
    pub version_spec: String,
}

/// Dependencies merged from `dependencies` and `devDependencies`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DependencySet {
    entries: Vec<DependencyEntry>,
}

impl DependencySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a dependency. A name that is already present keeps its position
    /// and takes the new version.
    pub fn insert(&mut self, name: impl Into<String>, version_spec: impl Into<String>) {
        let name = name.into();
        let version_spec = version_spec.into();

        match self.entries.iter_mut().find(|entry| entry.name == name) {
            Some(existing) => existing.version_spec = version_spec,
            None => self.entries.push(DependencyEntry { name, version_spec }),
        }
    }

    /// Version declared for `name`, if any
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.version_spec.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DependencyEntry> {
        self.entries.iter()
    }

    /// The first `limit` dependency names in insertion order
    pub fn first_names(&self, limit: usize) -> impl Iterator<Item = &str> {
        self.entries.iter().take(limit).map(|entry| entry.name.as_str())
    }
}

/// A named script from the `scripts` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptEntry {
    pub name: String,
    pub command: String,
}

/// Scripts copied verbatim from the manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScriptSet {
    entries: Vec<ScriptEntry>,
}

impl ScriptSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a script; a repeated name replaces the earlier command in place
    pub fn insert(&mut self, name: impl Into<String>, command: impl Into<String>) {
        let name = name.into();
        let command = command.into();

        match self.entries.iter_mut().find(|entry| entry.name == name) {
            Some(existing) => existing.command = command,
            None => self.entries.push(ScriptEntry { name, command }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.command.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScriptEntry> {
        self.entries.iter()
    }
}

/// Everything the report needs from package.json
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectManifest {
    pub dependencies: DependencySet,
    pub scripts: ScriptSet,
}

impl ProjectManifest {
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty() && self.scripts.is_empty()
    }
}
