//! Contact extraction
//!
//! Two independent scans over a parsed page:
//! - Email addresses from visible text and `mailto:` anchors
//! - Social profile links from resolved anchor targets

mod email;
mod social;

pub use email::{mailto_address, EmailExtractor};
pub use social::SocialExtractor;

use crate::page::Document;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use url::Url;

/// Social networks recognised by the link classifier
///
/// Declaration order is the output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Platform {
    LinkedIn,
    Twitter,
    Instagram,
    Facebook,
}

impl Platform {
    /// All platforms in their fixed output order
    pub const ALL: [Platform; 4] = [
        Platform::LinkedIn,
        Platform::Twitter,
        Platform::Instagram,
        Platform::Facebook,
    ];

    /// Display name, also used as the `type` column in reports
    pub fn name(&self) -> &'static str {
        match self {
            Self::LinkedIn => "LinkedIn",
            Self::Twitter => "Twitter",
            Self::Instagram => "Instagram",
            Self::Facebook => "Facebook",
        }
    }

    /// Case-insensitive pattern an absolute URL must match
    pub fn url_pattern(&self) -> &'static str {
        match self {
            Self::LinkedIn => r"^https?://(www\.)?linkedin\.com/",
            Self::Twitter => r"^https?://(www\.)?(twitter\.com|x\.com)/",
            Self::Instagram => r"^https?://(www\.)?instagram\.com/",
            Self::Facebook => r"^https?://(www\.)?facebook\.com/",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unique social links grouped by platform
///
/// Every platform has an entry, empty or not. Sets are ordered, so
/// iteration yields URLs in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLinks {
    links: BTreeMap<Platform, BTreeSet<String>>,
}

impl Default for SocialLinks {
    fn default() -> Self {
        Self::new()
    }
}

impl SocialLinks {
    pub fn new() -> Self {
        Self {
            links: Platform::ALL
                .iter()
                .map(|&platform| (platform, BTreeSet::new()))
                .collect(),
        }
    }

    /// Adds a link; returns false if it was already present
    pub fn insert(&mut self, platform: Platform, url: String) -> bool {
        self.links.entry(platform).or_default().insert(url)
    }

    pub fn get(&self, platform: Platform) -> &BTreeSet<String> {
        // Every platform is populated in `new`
        static EMPTY: BTreeSet<String> = BTreeSet::new();
        self.links.get(&platform).unwrap_or(&EMPTY)
    }

    /// Iterates platforms in `Platform::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = (Platform, &BTreeSet<String>)> + '_ {
        Platform::ALL
            .into_iter()
            .map(move |platform| (platform, self.get(platform)))
    }

    /// Number of links across all platforms
    pub fn total(&self) -> usize {
        self.links.values().map(BTreeSet::len).sum()
    }
}

/// Everything found on one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Unique email strings, case-sensitive
    pub emails: BTreeSet<String>,

    /// Social links per platform
    pub social: SocialLinks,
}

impl Extraction {
    pub fn email_count(&self) -> usize {
        self.emails.len()
    }

    pub fn social_count(&self) -> usize {
        self.social.total()
    }
}

/// Runs both scans over a page
#[derive(Debug, Clone)]
pub struct ContactExtractor {
    emails: EmailExtractor,
    social: SocialExtractor,
}

impl ContactExtractor {
    /// Compiles the email and platform patterns
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            emails: EmailExtractor::new()?,
            social: SocialExtractor::new()?,
        })
    }

    /// Extracts emails and social links
    ///
    /// # Arguments
    ///
    /// * `document` - The parsed page
    /// * `base_url` - URL relative hrefs resolve against (the post-redirect URL)
    ///
    /// # Example
    ///
    /// ```
    /// use lead_extractor::extract::{ContactExtractor, Platform};
    /// use lead_extractor::page::Document;
    /// use url::Url;
    ///
    /// let doc = Document::parse(r#"<p>hi@acme.com</p><a href="https://x.com/acme">x</a>"#);
    /// let base = Url::parse("https://acme.com/").unwrap();
    /// let found = ContactExtractor::new().unwrap().extract(&doc, &base);
    ///
    /// assert!(found.emails.contains("hi@acme.com"));
    /// assert!(found.social.get(Platform::Twitter).contains("https://x.com/acme"));
    /// ```
    pub fn extract(&self, document: &Document, base_url: &Url) -> Extraction {
        let emails = self.emails.extract(document);
        let social = self.social.extract(document, base_url);

        tracing::info!(
            "Extracted {} emails and {} social links",
            emails.len(),
            social.total()
        );

        Extraction { emails, social }
    }
}
