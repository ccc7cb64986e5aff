//! Report rows
//!
//! Both report formats are fed from the same row sequence built here.

use crate::extract::{Extraction, Platform};
use std::fmt;

/// Header row shared by every report format
pub const HEADER: [&str; 2] = ["type", "value"];

/// What kind of contact a record holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Email,
    Social(Platform),
}

impl Category {
    /// Text written to the `type` column
    pub fn name(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Social(platform) => platform.name(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One `(type, value)` row of a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    pub category: Category,
    pub value: String,
}

impl ContactRecord {
    /// The record as report cells
    pub fn cells(&self) -> [&str; 2] {
        [self.category.name(), self.value.as_str()]
    }
}

/// Flattens an extraction into report order
///
/// Emails come first, then each platform in declared order. Values are
/// ascending within each group.
pub fn contact_records(extraction: &Extraction) -> Vec<ContactRecord> {
    let emails = extraction.emails.iter().map(|email| ContactRecord {
        category: Category::Email,
        value: email.clone(),
    });

    let social = extraction.social.iter().flat_map(|(platform, urls)| {
        urls.iter().map(move |url| ContactRecord {
            category: Category::Social(platform),
            value: url.clone(),
        })
    });

    emails.chain(social).collect()
}
