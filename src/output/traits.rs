//! Report writer trait
//!
//! Each output format implements `ReportWriter`; the driver runs them in
//! sequence over the same records.

use crate::output::records::ContactRecord;
use crate::WriteError;
use std::path::Path;

/// Result type for output operations
pub type OutputResult<T> = Result<T, WriteError>;

/// Trait for report writers
pub trait ReportWriter {
    /// Short format name used in log output
    fn format_name(&self) -> &'static str;

    /// Destination file
    fn path(&self) -> &Path;

    /// Writes the header followed by `records`, replacing any existing file
    fn write(&self, records: &[ContactRecord]) -> OutputResult<()>;
}
