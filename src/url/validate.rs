use url::Url;

/// Returns true iff `s` is a well-formed absolute URL with a scheme and a host
///
/// This is a predicate: malformed input yields `false`, never an error.
///
/// # Examples
///
/// ```
/// use page_glean::url::is_valid_url;
///
/// assert!(is_valid_url("https://example.com/page"));
/// assert!(!is_valid_url("example.com/page"));
/// assert!(!is_valid_url("mailto:someone@example.com"));
/// ```
pub fn is_valid_url(s: &str) -> bool {
    parse_absolute_url(s).is_some()
}

/// Parses `s` as an absolute URL, returning `None` unless a host is present
pub fn parse_absolute_url(s: &str) -> Option<Url> {
    let url = Url::parse(s.trim()).ok()?;

    if url.scheme().is_empty() {
        return None;
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Some(url),
        _ => None,
    }
}
