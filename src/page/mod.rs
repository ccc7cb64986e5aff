//! Page retrieval and parsing
//!
//! This module contains:
//! - The HTTP fetcher (single GET, redirect-aware)
//! - The HTML document wrapper used by the extractors

mod document;
mod fetcher;

pub use document::{Anchor, Document};
pub use fetcher::{build_http_client, FetchedPage, Fetcher};
