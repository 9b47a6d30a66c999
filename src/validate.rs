//! Syntactic validators for IPv4 addresses and DNS domain names.
//!
//! Both validators are pure: they classify a token without touching any
//! state. Feed cleaners call them on every candidate field, so the compiled
//! patterns are built once via `once_cell::sync::Lazy`.

use once_cell::sync::Lazy;
use regex::Regex;

/// Dotted-quad shape: four runs of 1-3 digits. Octet range is checked
/// separately since the pattern alone admits values like 999.
static IPV4_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:\d{1,3}\.){3}\d{1,3}$").unwrap());

/// Domain grammar: one or more inner labels (1-63 alphanumeric-or-hyphen
/// characters, no leading or trailing hyphen) followed by a purely
/// alphabetic final label of at least two characters. Dotless tokens like
/// "localhost" are rejected.
static DOMAIN_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z]{2,63}$").unwrap()
});

/// Maximum total length of a domain name, per RFC 1035.
const MAX_DOMAIN_LEN: usize = 253;

/// Check whether a token is a syntactically valid IPv4 address.
///
/// Each of the four dot-separated components must parse as an integer in
/// [0, 255] with no extraneous characters. Leading-zero forms like "00"
/// are accepted; out-of-range octets like "256" are not.
///
/// # Example
/// ```
/// use feedmerge::validate::is_ipv4;
///
/// assert!(is_ipv4("192.168.1.1"));
/// assert!(is_ipv4("0.0.0.0"));
/// assert!(!is_ipv4("256.1.1.1"));
/// assert!(!is_ipv4("1.2.3"));
/// ```
pub fn is_ipv4(token: &str) -> bool {
    if !IPV4_SHAPE.is_match(token) {
        return false;
    }
    token.split('.').all(|octet| octet.parse::<u8>().is_ok())
}

/// Check whether a token is a syntactically valid DNS domain name.
///
/// Rules: total length 1-253 characters; at least two dot-separated labels
/// of 1-63 characters each, alphanumeric plus hyphen, never starting or
/// ending with a hyphen; the final label purely alphabetic with length
/// >= 2. Matching is case-insensitive.
///
/// # Example
/// ```
/// use feedmerge::validate::is_domain;
///
/// assert!(is_domain("example.com"));
/// assert!(is_domain("Sub.Example.COM"));
/// assert!(!is_domain("example..com"));
/// assert!(!is_domain("-bad.example.com"));
/// ```
pub fn is_domain(token: &str) -> bool {
    // The regex crate has no lookahead, so the length bound is a separate
    // precondition rather than part of the pattern.
    if token.is_empty() || token.len() > MAX_DOMAIN_LEN {
        return false;
    }
    DOMAIN_SHAPE.is_match(token)
}
