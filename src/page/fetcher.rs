//! HTTP fetcher implementation
//!
//! One GET per run. Redirects are followed by the client and the final URL
//! is kept so relative links resolve against the page that was actually
//! served.

use crate::config::FetchConfig;
use crate::FetchError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// A successfully fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub final_url: Url,

    /// HTTP status code
    pub status: u16,

    /// Page body decoded as text
    pub body: String,
}

/// Single-request HTTP fetcher
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    timeout: Duration,
}

impl Fetcher {
    /// Builds a fetcher from the fetch configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use lead_extractor::config::FetchConfig;
    /// use lead_extractor::page::Fetcher;
    ///
    /// let fetcher = Fetcher::new(&FetchConfig::default()).unwrap();
    /// ```
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let client = build_http_client(config)?;
        Ok(Self {
            client,
            timeout: config.timeout(),
        })
    }

    /// Fetches a URL and returns its body together with the final URL
    ///
    /// | Condition | Result |
    /// |-----------|--------|
    /// | 2xx | `Ok(FetchedPage)` |
    /// | Any other status after redirects | `FetchError::Status` |
    /// | Timeout | `FetchError::Timeout` |
    /// | DNS failure / connection refused / TLS | `FetchError::Connect` |
    /// | Anything else (bad URL, body read) | `FetchError::Request` |
    ///
    /// There is no retry; the first failure is final.
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        tracing::info!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(url, e))?;

        let status = response.status();
        let final_url = response.url().clone();

        if final_url.as_str() != url {
            tracing::debug!("Redirected to {}", final_url);
        }

        if !status.is_success() {
            return Err(FetchError::Status {
                url: final_url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.classify(url, e))?;

        tracing::debug!("Received {} bytes from {}", body.len(), final_url);

        Ok(FetchedPage {
            final_url,
            status: status.as_u16(),
            body,
        })
    }

    fn classify(&self, url: &str, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
                seconds: self.timeout.as_secs(),
            }
        } else if error.is_connect() {
            FetchError::Connect {
                url: url.to_string(),
                message: error_chain(&error),
            }
        } else {
            FetchError::Request {
                url: url.to_string(),
                source: error,
            }
        }
    }
}

/// Builds an HTTP client with the configured user agent and timeout
pub fn build_http_client(config: &FetchConfig) -> Result<Client, FetchError> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout())
        .gzip(true)
        .brotli(true)
        .build()
        .map_err(FetchError::Client)
}

// reqwest's own message for connect errors is just "error sending request";
// the useful part (DNS, refused, TLS) sits further down the source chain.
fn error_chain(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = std::error::Error::source(cause);
    }
    message
}
