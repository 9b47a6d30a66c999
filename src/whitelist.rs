//! Whitelist loading and suffix matching.
//!
//! A whitelist is a set of lowercase domain patterns. A domain is covered
//! when it equals a pattern exactly or is a subdomain of one, at any depth.
//! That suffix rule is the only matching rule; there is no wildcard-middle
//! or regex matching.

use ahash::AHashSet;
use std::fs;
use std::path::Path;

use crate::validate::is_domain;

/// Set of domain patterns suppressed from the domain and URL outputs.
#[derive(Debug, Clone, Default)]
pub struct Whitelist {
    patterns: AHashSet<String>,
}

impl Whitelist {
    /// Create an empty whitelist (filters nothing).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse whitelist patterns from text, one per line.
    ///
    /// Per non-empty, non-comment line: strip a `*.` prefix, strip one
    /// trailing dot, lowercase, and keep iff the result is a valid domain.
    pub fn parse(text: &str) -> Self {
        let mut patterns = AHashSet::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let pattern = line.strip_prefix("*.").unwrap_or(line);
            let pattern = pattern.strip_suffix('.').unwrap_or(pattern);
            let pattern = pattern.to_lowercase();

            if is_domain(&pattern) {
                patterns.insert(pattern);
            }
        }

        Self { patterns }
    }

    /// Load a whitelist from a file.
    ///
    /// A missing file is the expected "no whitelist" case and yields the
    /// empty whitelist; any other IO error propagates.
    pub fn load(path: impl AsRef<Path>) -> std::io::Result<Self> {
        match fs::read_to_string(path.as_ref()) {
            Ok(text) => Ok(Self::parse(&text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("whitelist {:?} not found, filtering disabled", path.as_ref());
                Ok(Self::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Number of patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the whitelist holds no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Check whether a domain equals a pattern or is a subdomain of one.
    ///
    /// Case-insensitive on both sides (patterns are stored lowercase).
    pub fn matches_domain(&self, domain: &str) -> bool {
        if self.patterns.is_empty() {
            return false;
        }

        let domain = domain.to_lowercase();
        if self.patterns.contains(&domain) {
            return true;
        }

        // Walk parent domains: a.b.c -> b.c -> c
        let mut current = domain.as_str();
        while let Some(pos) = current.find('.') {
            current = &current[pos + 1..];
            if self.patterns.contains(current) {
                return true;
            }
        }

        false
    }

    /// Check whether a URL's host is whitelisted.
    ///
    /// A URL whose host cannot be extracted never matches.
    pub fn matches_url(&self, url: &str) -> bool {
        match url_host(url) {
            Some(host) => self.matches_domain(&host),
            None => false,
        }
    }
}

/// Extract the validated host of a URL.
///
/// Parses the URL, takes the host component (the port, if any, is not part
/// of it), strips leading dots, lowercases, and validates against the
/// domain grammar. Returns `None` for malformed URLs and for hosts that
/// are not domains (IP literals included).
pub fn url_host(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    let host = host.trim_start_matches('.').to_lowercase();

    if is_domain(&host) {
        Some(host)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_patterns() {
        let wl = Whitelist::parse("good.example\n*.trusted.example\ndotted.example.\n");
        assert_eq!(wl.len(), 3);
        assert!(wl.matches_domain("good.example"));
        assert!(wl.matches_domain("trusted.example"));
        assert!(wl.matches_domain("dotted.example"));
    }

    #[test]
    fn test_parse_skips_comments_blank_and_invalid() {
        let wl = Whitelist::parse("# header\n\nnot valid!\ngood.example\n");
        assert_eq!(wl.len(), 1);
    }

    #[test]
    fn test_exact_and_subdomain_match() {
        let wl = Whitelist::parse("good.example\n");
        assert!(wl.matches_domain("good.example"));
        assert!(wl.matches_domain("sub.good.example"));
        assert!(wl.matches_domain("a.b.sub.good.example"));
        assert!(!wl.matches_domain("notgood.example"));
        assert!(!wl.matches_domain("good.example.evil.test"));
    }

    #[test]
    fn test_match_case_insensitive() {
        let wl = Whitelist::parse("Good.Example\n");
        assert!(wl.matches_domain("GOOD.EXAMPLE"));
        assert!(wl.matches_domain("Sub.Good.Example"));
    }

    #[test]
    fn test_empty_whitelist_matches_nothing() {
        let wl = Whitelist::new();
        assert!(wl.is_empty());
        assert!(!wl.matches_domain("anything.example"));
        assert!(!wl.matches_url("http://anything.example/x"));
    }

    #[test]
    fn test_matches_url() {
        let wl = Whitelist::parse("good.example\n");
        assert!(wl.matches_url("http://good.example/path"));
        assert!(wl.matches_url("https://sub.good.example:8443/x?q=1"));
        assert!(!wl.matches_url("http://bad.example/"));
        assert!(!wl.matches_url("not a url"));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let wl = Whitelist::load("/nonexistent/whitelist.txt").unwrap();
        assert!(wl.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("whitelist.txt");
        fs::write(&path, "good.example\n# comment\n").unwrap();

        let wl = Whitelist::load(&path).unwrap();
        assert_eq!(wl.len(), 1);
        assert!(wl.matches_domain("good.example"));
    }

    #[test]
    fn test_url_host_extraction() {
        assert_eq!(url_host("http://Evil.Test/path"), Some("evil.test".to_string()));
        assert_eq!(url_host("https://evil.test:8080/x"), Some("evil.test".to_string()));
        assert_eq!(url_host("http://1.2.3.4/x"), None);
        assert_eq!(url_host("nonsense"), None);
        assert_eq!(url_host(""), None);
    }
}
