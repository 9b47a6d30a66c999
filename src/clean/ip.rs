//! IP feed cleaner.

use ahash::AHashSet;

use super::is_comment;
use crate::validate::is_ipv4;

/// Extract the set of valid IPv4 addresses from raw feed text.
///
/// Per non-empty, non-comment line: the first whitespace-delimited field is
/// kept iff it is a well-formed dotted quad. This handles plain lists as
/// well as netset files that append comments after the address.
pub fn clean_ips(text: &str) -> AHashSet<String> {
    let mut out = AHashSet::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || is_comment(line) {
            continue;
        }

        let Some(token) = line.split_whitespace().next() else {
            continue;
        };
        if is_ipv4(token) {
            out.insert(token.to_string());
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_list() {
        let text = "1.2.3.4\n5.6.7.8\n";
        let ips = clean_ips(text);
        assert_eq!(ips.len(), 2);
        assert!(ips.contains("1.2.3.4"));
        assert!(ips.contains("5.6.7.8"));
    }

    #[test]
    fn test_skips_comments_and_blanks() {
        let text = "# header\n; also a comment\n\n1.2.3.4\n";
        let ips = clean_ips(text);
        assert_eq!(ips.len(), 1);
        assert!(ips.contains("1.2.3.4"));
    }

    #[test]
    fn test_takes_first_field_only() {
        let text = "1.2.3.4 seen 2024-01-01\n";
        let ips = clean_ips(text);
        assert!(ips.contains("1.2.3.4"));
        assert_eq!(ips.len(), 1);
    }

    #[test]
    fn test_rejects_invalid_tokens() {
        // CIDR ranges, out-of-range octets and domains are all dropped.
        let text = "10.0.0.0/8\n256.1.1.1\nexample.com\n1.2.3.4\n";
        let ips = clean_ips(text);
        assert_eq!(ips.len(), 1);
        assert!(ips.contains("1.2.3.4"));
    }

    #[test]
    fn test_deduplicates() {
        let text = "1.2.3.4\n1.2.3.4\n1.2.3.4\n";
        assert_eq!(clean_ips(text).len(), 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(clean_ips("").is_empty());
    }
}
