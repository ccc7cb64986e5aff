use crate::InputError;

/// Scheme prepended to input that does not carry one
const DEFAULT_SCHEME: &str = "https://";

/// Normalizes a user-supplied URL string
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace
/// 2. Reject empty input
/// 3. Prepend `https://` when no URI scheme is present (a scheme-relative
///    `//host/path` only gains the scheme)
///
/// Nothing else is checked here. Hosts that do not resolve and other
/// malformed input surface later as fetch errors.
///
/// # Arguments
///
/// * `raw` - The string typed by the user
///
/// # Returns
///
/// * `Ok(String)` - URL ready to be fetched
/// * `Err(InputError::Empty)` - Input was empty or whitespace only
///
/// # Examples
///
/// ```
/// use lead_extractor::url::normalize_input;
///
/// assert_eq!(normalize_input("  acme.com ").unwrap(), "https://acme.com");
/// assert_eq!(normalize_input("http://acme.com").unwrap(), "http://acme.com");
/// assert!(normalize_input("   ").is_err());
/// ```
pub fn normalize_input(raw: &str) -> Result<String, InputError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    if has_scheme(trimmed) {
        Ok(trimmed.to_string())
    } else if let Some(rest) = trimmed.strip_prefix("//") {
        Ok(format!("{}{}", DEFAULT_SCHEME, rest))
    } else {
        Ok(format!("{}{}", DEFAULT_SCHEME, trimmed))
    }
}

/// Checks for a leading RFC 3986 scheme: `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"`
///
/// Like any generic URI parser this reads `localhost:3000` as scheme
/// `localhost`.
fn has_scheme(input: &str) -> bool {
    let Some((scheme, _)) = input.split_once(':') else {
        return false;
    };

    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
