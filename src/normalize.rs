//! Domain normalization.
//!
//! Feeds carry domains wrapped in all kinds of decoration: hosts-file
//! redirect prefixes, wildcard markers, paths, ports, trailing comments.
//! [`normalize_domain`] reduces a raw token to a bare validated domain or
//! rejects it.

use crate::validate::is_domain;

/// Redirect addresses used by hosts-file style feeds (`<ip> <domain>`).
pub(crate) const HOSTS_REDIRECTS: [&str; 2] = ["0.0.0.0", "127.0.0.1"];

/// Normalize a raw token to a bare lowercase domain.
///
/// Steps, in order: lowercase; reject anything carrying an HTTP(S) scheme
/// (a scheme means the token is a URL, not a domain); strip leading dots;
/// strip a `*.` wildcard prefix; drop everything from the first `/` (path)
/// and `#` (inline comment); take the first whitespace-delimited field,
/// skipping over a hosts-file redirect address if one is still embedded;
/// reject if a `:` remains (port marker or IPv6 literal); finally validate
/// against the domain grammar.
///
/// Idempotent: normalizing an already-normalized domain returns it
/// unchanged.
///
/// # Example
/// ```
/// use feedmerge::normalize::normalize_domain;
///
/// assert_eq!(normalize_domain("*.Sub.Example.COM"), Some("sub.example.com".into()));
/// assert_eq!(normalize_domain("evil.test/path"), Some("evil.test".into()));
/// assert_eq!(normalize_domain("http://evil.test/path"), None);
/// ```
pub fn normalize_domain(raw: &str) -> Option<String> {
    let token = raw.trim().to_lowercase();

    if token.starts_with("http://") || token.starts_with("https://") {
        return None;
    }

    let token = token.trim_start_matches('.');
    let token = token.strip_prefix("*.").unwrap_or(token);
    let token = token.split('/').next().unwrap_or("");
    let token = token.split('#').next().unwrap_or("");

    let mut fields = token.split_whitespace();
    let first = fields.next()?;
    let candidate = if HOSTS_REDIRECTS.contains(&first) {
        fields.next().unwrap_or(first)
    } else {
        first
    };

    if candidate.contains(':') {
        return None;
    }

    if is_domain(candidate) {
        Some(candidate.to_string())
    } else {
        None
    }
}
