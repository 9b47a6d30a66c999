//! Domain feed cleaner.

use ahash::AHashSet;

use super::is_comment;
use crate::normalize::{normalize_domain, HOSTS_REDIRECTS};

/// Extract the set of valid domains from raw feed text.
///
/// Handles three feed shapes: hosts-file format (`0.0.0.0 domain` /
/// `127.0.0.1 domain`), one domain per line, and lines with trailing
/// comments. The per-line candidate goes through [`normalize_domain`];
/// anything it rejects is dropped silently.
pub fn clean_domains(text: &str) -> AHashSet<String> {
    let mut out = AHashSet::new();

    for line in text.lines() {
        let mut line = line.trim();
        if line.is_empty() || is_comment(line) {
            continue;
        }

        for redirect in HOSTS_REDIRECTS {
            if let Some(rest) = line.strip_prefix(redirect).and_then(|r| r.strip_prefix(' ')) {
                line = rest.trim();
            }
        }

        if let Some(domain) = normalize_domain(line) {
            out.insert(domain);
        }
    }

    out
}
