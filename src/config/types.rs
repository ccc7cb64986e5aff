use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Main configuration structure for Lead Extractor
///
/// Every section and key has a default, so an empty TOML document (or no
/// document at all) yields a working configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchConfig,
    pub output: OutputConfig,
}

/// HTTP fetch configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Whole-request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Value sent in the User-Agent header
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Report output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the report files are written into
    pub directory: PathBuf,

    /// File name of the delimited text table
    #[serde(rename = "csv-file")]
    pub csv_file: String,

    /// File name of the spreadsheet workbook
    #[serde(rename = "xlsx-file")]
    pub xlsx_file: String,

    /// Name of the single worksheet in the workbook
    #[serde(rename = "sheet-name")]
    pub sheet_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            csv_file: "leads.csv".to_string(),
            xlsx_file: "leads.xlsx".to_string(),
            sheet_name: "Leads".to_string(),
        }
    }
}

impl OutputConfig {
    pub fn csv_path(&self) -> PathBuf {
        join_output(&self.directory, &self.csv_file)
    }

    pub fn xlsx_path(&self) -> PathBuf {
        join_output(&self.directory, &self.xlsx_file)
    }
}

// "./leads.csv" reads worse than "leads.csv" in the summary line.
fn join_output(directory: &Path, file: &str) -> PathBuf {
    if directory == Path::new(".") {
        PathBuf::from(file)
    } else {
        directory.join(file)
    }
}
