//! URL handling module for Lead Extractor
//!
//! This module turns user input into a fetchable URL and resolves anchor
//! hrefs against the page they were found on.

mod normalize;
mod resolve;

// Re-export main functions
pub use normalize::normalize_input;
pub use resolve::resolve_href;
