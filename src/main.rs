//! Lead Extractor main entry point
//!
//! This is the command-line interface for the Lead Extractor.

use anyhow::Context;
use clap::Parser;
use lead_extractor::config::{load_config, Config};
use lead_extractor::pipeline::read_url_line;
use lead_extractor::{run, InputError};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Lead Extractor: pull contact details from a web page
///
/// Fetches one page, collects email addresses and LinkedIn, Twitter/X,
/// Instagram and Facebook links, and saves them as leads.csv and
/// leads.xlsx. Without a URL argument the URL is read from standard input.
#[derive(Parser, Debug)]
#[command(name = "lead-extractor")]
#[command(version)]
#[command(about = "Extract emails and social links from a web page", long_about = None)]
struct Cli {
    /// Page to scan (prompted for when omitted)
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory to write the report files into
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(dir) = cli.output_dir {
        config.output.directory = dir;
    }

    let raw_url = match cli.url {
        Some(url) => url,
        None => match prompt_for_url() {
            Ok(line) => line,
            Err(e) => {
                tracing::debug!("Run aborted: {:?}", e);
                println!("{}", e);
                return Ok(());
            }
        },
    };

    // Run failures are reported, not turned into an exit status
    match run(&raw_url, &config).await {
        Ok(summary) => {
            tracing::info!("Finished scanning {}", summary.final_url);
            println!("{}", summary.message());
        }
        Err(e) => {
            tracing::debug!("Run aborted: {:?}", e);
            println!("{}", e);
        }
    }

    Ok(())
}

/// Prints the prompt and reads one line from standard input
fn prompt_for_url() -> Result<String, InputError> {
    let mut stdout = io::stdout();
    // A failed prompt write does not stop the line from being read
    let _ = write!(stdout, "Enter URL: ").and_then(|_| stdout.flush());

    read_url_line(io::stdin().lock())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so stdout only carries the prompt and the result line.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("lead_extractor=warn"),
            1 => EnvFilter::new("lead_extractor=info,warn"),
            2 => EnvFilter::new("lead_extractor=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
