use url::Url;

/// Reports whether two URL strings share an origin
///
/// Origins compare as the scheme + host + port triple; all three must match
/// exactly. Input that fails to parse matches nothing, itself included.
///
/// # Examples
///
/// ```
/// use rockpool::url::same_origin;
///
/// assert!(same_origin("http://a.com/x", "http://a.com/y"));
/// assert!(!same_origin("http://a.com/x", "http://www.a.com/x"));
/// assert!(!same_origin("not a url", "not a url"));
/// ```
pub fn same_origin(a: &str, b: &str) -> bool {
    match (Url::parse(a), Url::parse(b)) {
        (Ok(a), Ok(b)) => a.origin() == b.origin(),
        _ => false,
    }
}
