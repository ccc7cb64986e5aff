use crate::extract::{Platform, SocialLinks};
use crate::page::Document;
use crate::url::resolve_href;
use regex::{Regex, RegexBuilder};
use url::Url;

/// Classifies resolved anchor targets as social profile links
///
/// Holds one compiled pattern per platform, in `Platform::ALL` order.
#[derive(Debug, Clone)]
pub struct SocialExtractor {
    patterns: Vec<(Platform, Regex)>,
}

impl SocialExtractor {
    pub fn new() -> Result<Self, regex::Error> {
        let patterns = Platform::ALL
            .iter()
            .map(|&platform| {
                RegexBuilder::new(platform.url_pattern())
                    .case_insensitive(true)
                    .build()
                    .map(|regex| (platform, regex))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    /// Returns the platform an absolute URL belongs to, if any
    ///
    /// Patterns are tried in declared order and the first hit wins. Hosts
    /// do not overlap, so at most one could match anyway.
    pub fn classify(&self, url: &Url) -> Option<Platform> {
        self.patterns
            .iter()
            .find(|(_, regex)| regex.is_match(url.as_str()))
            .map(|(platform, _)| *platform)
    }

    /// Resolves every anchor against `base_url` and buckets social links
    pub fn extract(&self, document: &Document, base_url: &Url) -> SocialLinks {
        let mut links = SocialLinks::new();

        for anchor in document.anchors() {
            let Some(resolved) = resolve_href(base_url, &anchor.href) else {
                continue;
            };

            if let Some(platform) = self.classify(&resolved) {
                tracing::debug!("{} link: {}", platform, resolved);
                links.insert(platform, resolved.into());
            }
        }

        links
    }
}
