//! Name Normalizer - Canonicalize candidate names and filter them by domain
//!
//! Certificate Transparency records are noisy: names arrive with wildcard
//! markers, mixed case, stray whitespace, and hostnames that merely share a
//! suffix with the target. This module turns raw lines into canonical
//! hostnames that are guaranteed to sit under the target domain at a label
//! boundary.

use crate::Result;
use crate::error::DiscoveryError;
use std::collections::BTreeSet;

/// Wildcard label marker stripped from the front of a candidate
const WILDCARD_PREFIX: &str = "*.";

/// Normalize a raw candidate name against the target domain
///
/// Trims whitespace, lowercases, strips a single leading `*.`, then accepts
/// the name only if it equals `domain` or ends with `"." + domain`.
/// `domain` is expected to be canonical already (see [`normalize_domain`]).
///
/// # Examples
/// ```
/// use subrun::scanner::normalizer::normalize;
///
/// assert_eq!(normalize("*.Example.com", "example.com").as_deref(), Some("example.com"));
/// assert_eq!(normalize("evilexample.com", "example.com"), None);
/// ```
pub fn normalize(raw: &str, domain: &str) -> Option<String> {
    let lowered = raw.trim().to_lowercase();
    let name = lowered.strip_prefix(WILDCARD_PREFIX).unwrap_or(&lowered);

    if domain.is_empty() || name.is_empty() {
        return None;
    }

    if is_within_domain(name, domain) {
        Some(name.to_string())
    } else {
        None
    }
}

/// Label-boundary suffix check: `name` is `domain` or a subdomain of it
fn is_within_domain(name: &str, domain: &str) -> bool {
    match name.strip_suffix(domain) {
        Some("") => true,
        Some(prefix) => prefix.ends_with('.'),
        None => false,
    }
}

/// Normalize every raw candidate and deduplicate the accepted names
///
/// The returned set iterates alphabetically.
pub fn collect_candidates<I, S>(raw: I, domain: &str) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .filter_map(|candidate| normalize(candidate.as_ref(), domain))
        .collect()
}

/// Canonicalize the user supplied target domain
///
/// Lowercases and trims it, drops a trailing root dot and a leading `*.`,
/// and rejects anything that cannot be a bare domain name (URLs, e-mail
/// addresses, host:port pairs, embedded whitespace).
pub fn normalize_domain(input: &str) -> Result<String> {
    let lowered = input.trim().to_lowercase();
    let without_root = lowered.strip_suffix('.').unwrap_or(&lowered);
    let domain = without_root
        .strip_prefix(WILDCARD_PREFIX)
        .unwrap_or(without_root);

    if domain.is_empty() {
        return Err(DiscoveryError::InvalidInput {
            message: "Domain must not be empty".to_string(),
        });
    }

    if domain
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '/' | ':' | '@' | '*'))
    {
        return Err(DiscoveryError::InvalidInput {
            message: format!("'{}' is not a bare domain name", input.trim()),
        });
    }

    if domain.starts_with('.') || domain.contains("..") {
        return Err(DiscoveryError::InvalidInput {
            message: format!("'{}' contains an empty label", input.trim()),
        });
    }

    Ok(domain.to_string())
}
