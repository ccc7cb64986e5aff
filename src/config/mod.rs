//! Configuration module for Lead Extractor
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Without a file the built-in defaults apply.
//!
//! # Example
//!
//! ```no_run
//! use lead_extractor::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("leads.toml")).unwrap();
//! println!("Timeout: {}s", config.fetch.timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FetchConfig, OutputConfig, DEFAULT_TIMEOUT_SECS};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
