//! Feed catalog: which sources to pull, and how to interpret them.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The three output partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Ip,
    Domain,
    Url,
}

impl Category {
    /// Internal name of this category (also the output file stem).
    pub fn name(&self) -> &'static str {
        match self {
            Category::Ip => "ips",
            Category::Domain => "domains",
            Category::Url => "urls",
        }
    }

    /// Label used on the diagnostic stream for per-feed failures.
    pub fn tag(&self) -> &'static str {
        match self {
            Category::Ip => "IP",
            Category::Domain => "DOMAIN",
            Category::Url => "URL",
        }
    }
}

/// Wire shape of a URL feed.
///
/// Dispatch is an explicit per-feed tag in the catalog rather than
/// substring sniffing of the locator, so a future feed whose URL happens
/// to contain a provider's name cannot be misrouted. [`UrlFormat::detect`]
/// keeps the historical sniffing rule for callers that only have a locator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlFormat {
    /// One URL or bare domain per line.
    #[default]
    Lines,
    /// CSV export with a header row; the URL is the second column.
    Csv,
}

impl UrlFormat {
    /// Guess the format from a feed locator.
    ///
    /// The PhishTank export is the only known CSV-shaped feed.
    pub fn detect(source: &str) -> Self {
        if source.contains("phishtank.com") {
            UrlFormat::Csv
        } else {
            UrlFormat::Lines
        }
    }
}

/// A single feed source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feed {
    /// Remote locator of the feed.
    pub url: String,
    /// Wire shape; only meaningful for URL feeds.
    #[serde(default)]
    pub format: UrlFormat,
}

impl Feed {
    /// Create a feed, guessing the format from the locator.
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let format = UrlFormat::detect(&url);
        Self { url, format }
    }
}

/// Immutable catalog of feed sources, partitioned by category.
///
/// Order within a category is the fetch order; it never affects the merged
/// result, only the sequence of log lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeedCatalog {
    #[serde(default)]
    pub ips: Vec<Feed>,
    #[serde(default)]
    pub domains: Vec<Feed>,
    #[serde(default)]
    pub urls: Vec<Feed>,
}

impl FeedCatalog {
    /// Load a catalog from a YAML document.
    ///
    /// ```yaml
    /// ips:
    ///   - url: https://example.com/bad-ips.txt
    /// urls:
    ///   - url: https://example.com/export.csv
    ///     format: csv
    /// ```
    pub fn from_yaml(content: &str) -> Result<Self> {
        let catalog: FeedCatalog = serde_yaml::from_str(content)?;
        Ok(catalog)
    }

    /// The feeds configured for one category.
    pub fn feeds(&self, category: Category) -> &[Feed] {
        match category {
            Category::Ip => &self.ips,
            Category::Domain => &self.domains,
            Category::Url => &self.urls,
        }
    }

    /// Total number of configured feeds.
    pub fn len(&self) -> usize {
        self.ips.len() + self.domains.len() + self.urls.len()
    }

    /// Whether no feeds are configured at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for FeedCatalog {
    /// The stock public source list.
    fn default() -> Self {
        Self {
            ips: [
                "https://feodotracker.abuse.ch/downloads/ipblocklist_recommended.txt",
                "http://cinsscore.com/list/ci-badguys.txt",
                "https://lists.blocklist.de/lists/all.txt",
                "https://raw.githubusercontent.com/firehol/blocklist-ipsets/master/firehol_level1.netset",
            ]
            .into_iter()
            .map(Feed::new)
            .collect(),
            domains: [
                "https://urlhaus.abuse.ch/downloads/hostfile/",
                "https://raw.githubusercontent.com/StevenBlack/hosts/master/hosts",
                "https://mirror1.malwaredomains.com/files/justdomains",
            ]
            .into_iter()
            .map(Feed::new)
            .collect(),
            urls: [
                "https://urlhaus.abuse.ch/downloads/text/",
                "http://data.phishtank.com/data/online-valid.csv",
                "http://malc0de.com/bl/BOOT",
            ]
            .into_iter()
            .map(Feed::new)
            .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_names_and_tags() {
        assert_eq!(Category::Ip.name(), "ips");
        assert_eq!(Category::Domain.name(), "domains");
        assert_eq!(Category::Url.name(), "urls");
        assert_eq!(Category::Ip.tag(), "IP");
        assert_eq!(Category::Domain.tag(), "DOMAIN");
        assert_eq!(Category::Url.tag(), "URL");
    }

    #[test]
    fn test_format_detect() {
        assert_eq!(
            UrlFormat::detect("http://data.phishtank.com/data/online-valid.csv"),
            UrlFormat::Csv
        );
        assert_eq!(
            UrlFormat::detect("https://urlhaus.abuse.ch/downloads/text/"),
            UrlFormat::Lines
        );
    }

    #[test]
    fn test_stock_catalog() {
        let catalog = FeedCatalog::default();
        assert_eq!(catalog.feeds(Category::Ip).len(), 4);
        assert_eq!(catalog.feeds(Category::Domain).len(), 3);
        assert_eq!(catalog.feeds(Category::Url).len(), 3);
        assert_eq!(catalog.len(), 10);

        // The PhishTank export is tagged CSV by detection.
        let phishtank = catalog
            .urls
            .iter()
            .find(|f| f.url.contains("phishtank"))
            .unwrap();
        assert_eq!(phishtank.format, UrlFormat::Csv);
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
ips:
  - url: https://example.com/bad-ips.txt
urls:
  - url: https://example.com/export.csv
    format: csv
  - url: https://example.com/list.txt
"#;
        let catalog = FeedCatalog::from_yaml(yaml).unwrap();
        assert_eq!(catalog.ips.len(), 1);
        assert!(catalog.domains.is_empty());
        assert_eq!(catalog.urls[0].format, UrlFormat::Csv);
        assert_eq!(catalog.urls[1].format, UrlFormat::Lines);
    }

    #[test]
    fn test_from_yaml_rejects_unknown_fields() {
        assert!(FeedCatalog::from_yaml("cidrs:\n  - url: https://x.test/a").is_err());
    }

    #[test]
    fn test_empty_yaml_catalog() {
        let catalog = FeedCatalog::from_yaml("{}").unwrap();
        assert!(catalog.is_empty());
    }
}
