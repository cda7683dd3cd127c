//! Parsing functionality for project metadata files

pub mod package_json;

pub use package_json::PackageJsonParser;
