//! Output module for lead reports
//!
//! This module handles:
//! - Flattening extracted contacts into ordered report rows
//! - Writing the rows as a CSV table
//! - Writing the rows as an XLSX workbook

mod csv_output;
mod records;
mod traits;
mod xlsx_output;

pub use csv_output::{write_records, CsvReportWriter};
pub use records::{contact_records, Category, ContactRecord, HEADER};
pub use traits::{OutputResult, ReportWriter};
pub use xlsx_output::{build_workbook, XlsxReportWriter};

use crate::config::OutputConfig;
use crate::extract::Extraction;
use std::path::PathBuf;

/// Files produced by a successful report run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub csv: PathBuf,
    pub xlsx: PathBuf,
}

/// Writes the extraction to every configured report format
///
/// CSV is written first, then XLSX. The first failure stops the run, so a
/// CSV error means the workbook is never attempted.
///
/// # Arguments
///
/// * `extraction` - The contacts found on the page
/// * `config` - Output directory, file names, and sheet name
///
/// # Returns
///
/// * `Ok(ReportPaths)` - Both files written
/// * `Err(WriteError)` - A file could not be created or written
pub fn write_reports(extraction: &Extraction, config: &OutputConfig) -> OutputResult<ReportPaths> {
    let records = contact_records(extraction);

    let paths = ReportPaths {
        csv: config.csv_path(),
        xlsx: config.xlsx_path(),
    };

    let writers: [Box<dyn ReportWriter>; 2] = [
        Box::new(CsvReportWriter::new(paths.csv.clone())),
        Box::new(XlsxReportWriter::new(
            paths.xlsx.clone(),
            config.sheet_name.clone(),
        )),
    ];

    for writer in &writers {
        writer.write(&records)?;
        tracing::info!(
            "Wrote {} report with {} rows to {}",
            writer.format_name(),
            records.len(),
            writer.path().display()
        );
    }

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::Platform;
    use crate::WriteError;
    use tempfile::TempDir;

    fn output_config(dir: &TempDir) -> OutputConfig {
        OutputConfig {
            directory: dir.path().to_path_buf(),
            ..OutputConfig::default()
        }
    }

    #[test]
    fn test_write_reports_creates_both_files() {
        let dir = TempDir::new().unwrap();
        let mut extraction = Extraction::default();
        extraction.emails.insert("info@acme.com".to_string());
        extraction
            .social
            .insert(Platform::LinkedIn, "https://linkedin.com/company/acme".to_string());

        let paths = write_reports(&extraction, &output_config(&dir)).unwrap();

        assert_eq!(paths.csv, dir.path().join("leads.csv"));
        assert_eq!(paths.xlsx, dir.path().join("leads.xlsx"));
        assert_eq!(
            std::fs::read_to_string(&paths.csv).unwrap(),
            "type,value\nEmail,info@acme.com\nLinkedIn,https://linkedin.com/company/acme\n"
        );
        assert!(paths.xlsx.exists());
    }

    #[test]
    fn test_csv_failure_stops_before_xlsx() {
        let dir = TempDir::new().unwrap();
        let config = OutputConfig {
            directory: dir.path().join("missing"),
            ..OutputConfig::default()
        };

        let result = write_reports(&Extraction::default(), &config);

        assert!(matches!(result, Err(WriteError::Csv { .. })));
        assert!(!config.xlsx_path().exists());
    }
}
