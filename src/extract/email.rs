use crate::page::Document;
use regex::{Regex, RegexBuilder};
use std::collections::BTreeSet;

/// Email shape: local-part@domain.tld with a TLD of two or more letters
const EMAIL_PATTERN: &str = r"\b[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}\b";

const MAILTO_SCHEME: &str = "mailto:";

/// Finds email addresses in visible text and `mailto:` anchors
#[derive(Debug, Clone)]
pub struct EmailExtractor {
    email_regex: Regex,
}

impl EmailExtractor {
    pub fn new() -> Result<Self, regex::Error> {
        let email_regex = RegexBuilder::new(EMAIL_PATTERN)
            .case_insensitive(true)
            .build()?;

        Ok(Self { email_regex })
    }

    /// Extracts the unique email strings found in the document
    ///
    /// Deduplication is by exact string, so `A@b.com` and `a@b.com` are two
    /// entries. Mailto targets are taken verbatim even when they would not
    /// match the text pattern.
    pub fn extract(&self, document: &Document) -> BTreeSet<String> {
        let mut emails = self.extract_from_text(&document.visible_text());

        for anchor in document.anchors() {
            if let Some(address) = mailto_address(&anchor.href) {
                tracing::debug!("mailto target: {}", address);
                emails.insert(address.to_string());
            }
        }

        emails
    }

    /// Collects every non-overlapping pattern match in `text`
    pub fn extract_from_text(&self, text: &str) -> BTreeSet<String> {
        self.email_regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// Returns the address part of a `mailto:` href
///
/// The scheme is matched case-insensitively; everything from the first `?`
/// on is dropped and the remainder trimmed. Returns `None` for other hrefs
/// and for a mailto with no address.
pub fn mailto_address(href: &str) -> Option<&str> {
    let href = href.trim();

    let scheme = href.get(..MAILTO_SCHEME.len())?;
    if !scheme.eq_ignore_ascii_case(MAILTO_SCHEME) {
        return None;
    }

    let target = &href[MAILTO_SCHEME.len()..];
    let address = target.split('?').next().unwrap_or_default().trim();

    (!address.is_empty()).then_some(address)
}
