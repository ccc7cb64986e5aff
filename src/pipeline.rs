//! End-to-end lead extraction run
//!
//! normalize -> fetch -> parse -> extract -> write. Nothing is written
//! unless the fetch succeeds.

use crate::config::Config;
use crate::extract::{ContactExtractor, Extraction};
use crate::output::{write_reports, ReportPaths};
use crate::page::{Document, Fetcher};
use crate::url::normalize_input;
use crate::{InputError, Result};
use std::io::BufRead;
use url::Url;

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// The page the contacts came from, after redirects
    pub final_url: Url,

    /// Number of unique emails
    pub emails: usize,

    /// Number of unique social links across all platforms
    pub social_links: usize,

    /// Report files written
    pub paths: ReportPaths,
}

impl RunSummary {
    /// One-line summary printed at the end of a run
    pub fn message(&self) -> String {
        format!(
            "Saved {} emails and {} social links to {} and {}.",
            self.emails,
            self.social_links,
            self.paths.csv.display(),
            self.paths.xlsx.display()
        )
    }
}

/// Reads one line of user input holding the target URL
///
/// End of input yields an empty string, which normalization then rejects.
/// Read failures (including non-UTF-8 input) become `InputError::Unreadable`.
pub fn read_url_line<R: BufRead>(mut reader: R) -> std::result::Result<String, InputError> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(|e| InputError::Unreadable(e.to_string()))?;
    Ok(line)
}

/// Fetches a page and extracts its contacts without writing anything
///
/// # Returns
///
/// * `Ok((Url, Extraction))` - The post-redirect URL and the contacts found
/// * `Err(LeadError)` - Input or fetch failure
pub async fn extract_leads(raw_url: &str, config: &Config) -> Result<(Url, Extraction)> {
    let url = normalize_input(raw_url)?;
    let extractor = ContactExtractor::new()?;
    let fetcher = Fetcher::new(&config.fetch)?;

    let page = fetcher.fetch(&url).await?;

    let document = Document::parse(&page.body);
    if let Some(title) = document.title() {
        tracing::info!("Parsed page '{}'", title);
    }

    let extraction = extractor.extract(&document, &page.final_url);
    Ok((page.final_url, extraction))
}

/// Runs the whole pipeline for one URL
///
/// # Arguments
///
/// * `raw_url` - URL as typed by the user; normalized before use
/// * `config` - Fetch and output settings
///
/// # Returns
///
/// * `Ok(RunSummary)` - Reports written
/// * `Err(LeadError)` - The first failure; on input or fetch errors no file
///   has been touched
///
/// # Example
///
/// ```no_run
/// use lead_extractor::{run, Config};
///
/// # async fn example() -> lead_extractor::Result<()> {
/// let summary = run("acme.com", &Config::default()).await?;
/// println!("{}", summary.message());
/// # Ok(())
/// # }
/// ```
pub async fn run(raw_url: &str, config: &Config) -> Result<RunSummary> {
    let (final_url, extraction) = extract_leads(raw_url, config).await?;

    let paths = write_reports(&extraction, &config.output)?;

    Ok(RunSummary {
        final_url,
        emails: extraction.email_count(),
        social_links: extraction.social_count(),
        paths,
    })
}
