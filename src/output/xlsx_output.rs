//! Spreadsheet report output

use crate::output::records::{ContactRecord, HEADER};
use crate::output::traits::{OutputResult, ReportWriter};
use crate::WriteError;
use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, XlsxError};
use std::path::{Path, PathBuf};

/// Column widths for the type and value columns
const COLUMN_WIDTHS: [f64; 2] = [12.0, 60.0];

/// Writes records to a single-sheet XLSX workbook
#[derive(Debug, Clone)]
pub struct XlsxReportWriter {
    path: PathBuf,
    sheet_name: String,
}

impl XlsxReportWriter {
    pub fn new(path: impl Into<PathBuf>, sheet_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            sheet_name: sheet_name.into(),
        }
    }
}

impl ReportWriter for XlsxReportWriter {
    fn format_name(&self) -> &'static str {
        "XLSX"
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, records: &[ContactRecord]) -> OutputResult<()> {
        let to_error = |source| WriteError::Xlsx {
            path: self.path.clone(),
            source,
        };

        let mut workbook = build_workbook(&self.sheet_name, records).map_err(to_error)?;
        workbook.save(&self.path).map_err(to_error)
    }
}

/// Builds the workbook in memory: header row in bold, then one row per record
pub fn build_workbook(sheet_name: &str, records: &[ContactRecord]) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (col, (title, width)) in HEADER.iter().zip(COLUMN_WIDTHS).enumerate() {
        let col = col as ColNum;
        worksheet.write_string_with_format(0, col, *title, &header_format)?;
        worksheet.set_column_width(col, width)?;
    }

    for (index, record) in records.iter().enumerate() {
        let row = (index + 1) as RowNum;
        for (col, cell) in record.cells().into_iter().enumerate() {
            worksheet.write_string(row, col as ColNum, cell)?;
        }
    }

    Ok(workbook)
}
