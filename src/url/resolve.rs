use url::Url;

/// Resolves a (possibly relative) reference against `base` into an absolute URL
///
/// Path-only references are joined onto the base's scheme and host,
/// relative paths onto the base's directory, and scheme-qualified references
/// are returned as-is. Returns `None` if the reference cannot be joined.
///
/// # Examples
///
/// ```
/// use page_glean::url::resolve_reference;
/// use url::Url;
///
/// let base = Url::parse("https://example.com/x/y").unwrap();
/// assert_eq!(
///     resolve_reference(&base, "/about").as_deref(),
///     Some("https://example.com/about")
/// );
/// ```
pub fn resolve_reference(base: &Url, reference: &str) -> Option<String> {
    base.join(reference.trim()).ok().map(|url| url.to_string())
}
