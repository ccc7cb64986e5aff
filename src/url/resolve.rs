use url::Url;

/// Resolves an anchor href against the page's base URL
///
/// Standard relative-reference resolution applies, so `/about` on
/// `https://acme.com/team` becomes `https://acme.com/about` and absolute
/// hrefs come back as parsed. Non-HTTP schemes such as `mailto:` still
/// resolve; filtering is left to the caller.
///
/// # Returns
///
/// * `Some(Url)` - The absolute URL
/// * `None` - Empty href or one the URL parser rejects
pub fn resolve_href(base: &Url, href: &str) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    match base.join(href) {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::debug!("Skipping unresolvable href '{}': {}", href, e);
            None
        }
    }
}
