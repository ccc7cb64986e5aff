//! Comma-separated report output

use crate::output::records::{ContactRecord, HEADER};
use crate::output::traits::{OutputResult, ReportWriter};
use crate::WriteError;
use std::io;
use std::path::{Path, PathBuf};

/// Writes records as a UTF-8 CSV table with a `type,value` header
#[derive(Debug, Clone)]
pub struct CsvReportWriter {
    path: PathBuf,
}

impl CsvReportWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn csv_error(&self, source: csv::Error) -> WriteError {
        WriteError::Csv {
            path: self.path.clone(),
            source,
        }
    }
}

impl ReportWriter for CsvReportWriter {
    fn format_name(&self) -> &'static str {
        "CSV"
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, records: &[ContactRecord]) -> OutputResult<()> {
        let writer = csv::Writer::from_path(&self.path).map_err(|e| self.csv_error(e))?;

        write_records(writer, records).map_err(|e| self.csv_error(e))
    }
}

/// Writes header and records to any CSV writer, then flushes it
pub fn write_records<W: io::Write>(
    mut writer: csv::Writer<W>,
    records: &[ContactRecord],
) -> csv::Result<()> {
    writer.write_record(HEADER)?;

    for record in records {
        writer.write_record(record.cells())?;
    }

    writer.flush()?;
    Ok(())
}
