//! URL feed cleaner.

use ahash::AHashSet;

use super::is_comment;
use crate::feed::UrlFormat;
use crate::normalize::normalize_domain;

/// Extract the set of URLs from raw feed text.
///
/// `format` selects the wire shape (see [`UrlFormat`]):
/// - `Lines`: one URL or bare domain per line; bare domains are normalized
///   and promoted to `http://<domain>`.
/// - `Csv`: comma-separated export with one header row; the URL is the
///   second column.
pub fn clean_urls(text: &str, format: UrlFormat) -> AHashSet<String> {
    match format {
        UrlFormat::Lines => clean_url_lines(text),
        UrlFormat::Csv => clean_url_csv(text),
    }
}

fn has_http_scheme(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

fn clean_url_lines(text: &str) -> AHashSet<String> {
    let mut out = AHashSet::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || is_comment(line) {
            continue;
        }

        if has_http_scheme(line) {
            out.insert(line.to_string());
        } else if let Some(domain) = normalize_domain(line) {
            out.insert(format!("http://{domain}"));
        }
    }

    out
}

fn clean_url_csv(text: &str) -> AHashSet<String> {
    let mut out = AHashSet::new();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    for record in reader.records() {
        // A malformed row is feed noise, not a failure.
        let Ok(record) = record else {
            continue;
        };
        if record.len() < 2 {
            continue;
        }

        let field = record[1].trim();
        // Some exports double-wrap the URL column; the parser removes the
        // outer quoting, this removes one embedded layer.
        let field = field.strip_prefix('"').unwrap_or(field);
        let field = field.strip_suffix('"').unwrap_or(field);

        if has_http_scheme(field) {
            out.insert(field.to_string());
        }
    }

    out
}
