//! Data models for the analyzer

pub mod analysis;
pub mod config;
pub mod manifest;
pub mod stats;
