//! Integration tests for the lead extraction pipeline
//!
//! These tests use wiremock to create mock HTTP servers and run the full
//! fetch -> extract -> write cycle end-to-end against temporary directories.

mod fetch_tests;
mod pipeline_tests;

use lead_extractor::config::{Config, OutputConfig};
use tempfile::TempDir;

/// Creates a default configuration writing into `dir`
pub fn create_test_config(dir: &TempDir) -> Config {
    Config {
        output: OutputConfig {
            directory: dir.path().to_path_buf(),
            ..OutputConfig::default()
        },
        ..Config::default()
    }
}

/// Number of entries in a directory
pub fn file_count(dir: &TempDir) -> usize {
    std::fs::read_dir(dir.path())
        .expect("Failed to read temp dir")
        .count()
}
