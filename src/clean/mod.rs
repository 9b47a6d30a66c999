//! Category cleaners: raw feed text in, validated entry sets out.
//!
//! Each cleaner is best-effort by design: feed formats drift, so a line
//! that fails validation is dropped silently rather than treated as a feed
//! error. Blank lines and `#`/`;` comment lines are skipped everywhere.

mod domain;
mod ip;
mod url;

pub use domain::clean_domains;
pub use ip::clean_ips;
pub use url::clean_urls;

/// Whether a trimmed feed line is a comment.
pub(crate) fn is_comment(line: &str) -> bool {
    line.starts_with('#') || line.starts_with(';')
}
