//! Lead Extractor: contact scraping for a single web page
//!
//! This crate fetches one HTML page, pulls out email addresses and social
//! profile links, and writes them to a CSV table and an XLSX workbook.

pub mod config;
pub mod extract;
pub mod output;
pub mod page;
pub mod pipeline;
pub mod url;

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lead extraction runs
#[derive(Debug, Error)]
pub enum LeadError {
    #[error("{0}")]
    Input(#[from] InputError),

    #[error("Failed to fetch URL: {0}")]
    Fetch(#[from] FetchError),

    #[error("Failed to write output: {0}")]
    Write(#[from] WriteError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid built-in pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Problems with the URL supplied by the user
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("No URL provided.")]
    Empty,

    #[error("Failed to read URL from standard input: {0}")]
    Unreadable(String),
}

/// Network and HTTP failures while fetching the target page
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} timed out after {seconds}s")]
    Timeout { url: String, seconds: u64 },

    #[error("could not connect to {url}: {message}")]
    Connect { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("HTTP client error: {0}")]
    Client(#[source] reqwest::Error),
}

/// Failures while writing a report file
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("{path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },

    #[error("{path}: {source}")]
    Xlsx {
        path: PathBuf,
        source: rust_xlsxwriter::XlsxError,
    },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for lead extraction operations
pub type Result<T> = std::result::Result<T, LeadError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use extract::{Extraction, Platform, SocialLinks};
pub use pipeline::{run, RunSummary};
pub use crate::url::normalize_input;
