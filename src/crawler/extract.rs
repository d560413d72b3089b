//! Link extraction from raw HTML
//!
//! Discovery is pattern-based: anchor open tags are matched with a
//! non-greedy scan to the first `>`, and the href value is pulled out of
//! the tag text by quoted-value capture. Untrusted HTML is never executed
//! or parsed into a DOM.

use crate::url::normalize_url;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use url::Url;

/// Matches anchor element open tags, capturing the attribute text
static ANCHOR_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<a (.+?)>").expect("hardcoded regex pattern is valid"));

/// Matches an href attribute value between matching quotes, either style
static HREF_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"href=(?:"([^"]*)"|'([^']*)')"#).expect("hardcoded regex pattern is valid")
});

/// Extracts every anchor link from `html`, resolved against `base` and
/// normalized to origin + path
///
/// Attribute order inside a tag does not matter; the href is matched
/// independently against the full tag text. Candidates that are empty or
/// fail URL resolution are dropped rather than surfaced as errors. The
/// returned list is deduplicated, keeping first-occurrence order.
pub fn extract_links(html: &str, base: &Url) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for tag in ANCHOR_TAG_REGEX.captures_iter(html) {
        let attrs = &tag[1];
        let href = HREF_REGEX
            .captures(attrs)
            .and_then(|c| c.get(1).or_else(|| c.get(2)))
            .map(|m| m.as_str())
            .unwrap_or("");

        if href.is_empty() {
            continue;
        }

        let normalized = match resolve_href(href, base) {
            Some(url) => url,
            None => {
                tracing::debug!("Dropping unresolvable href {:?}", href);
                continue;
            }
        };

        if seen.insert(normalized.clone()) {
            links.push(normalized);
        }
    }

    links
}

/// Resolves one href candidate to its normalized absolute form
fn resolve_href(href: &str, base: &Url) -> Option<String> {
    // Bare www hosts are a common authoring shorthand; give them a scheme
    // so resolution treats them as absolute rather than relative paths.
    let candidate = if href.starts_with("www") {
        format!("http://{}", href)
    } else {
        href.to_string()
    };

    let resolved = base.join(&candidate).ok()?;
    Some(normalize_url(&resolved))
}
