use url::Url;

/// Normalizes a URL to its origin plus path, discarding query and fragment
///
/// Two URLs that differ only in query string or fragment collapse to the
/// same key, so the visited table treats them as one page. Default ports
/// are elided from the origin; explicit non-default ports are kept.
///
/// # Examples
///
/// ```
/// use rockpool::url::normalize_url;
/// use url::Url;
///
/// let url = Url::parse("http://example.com/x?q=1#frag").unwrap();
/// assert_eq!(normalize_url(&url), "http://example.com/x");
/// ```
pub fn normalize_url(url: &Url) -> String {
    format!("{}{}", url.origin().ascii_serialization(), url.path())
}
