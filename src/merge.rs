//! Merge orchestration: fetch every configured feed, clean it, union the
//! results per category, apply the whitelist, write sorted outputs.
//!
//! Processing is strictly sequential in catalog order. A feed that fails
//! to fetch is logged to the diagnostic stream as
//! `[CATEGORY] <locator> -> <reason>` and skipped; the category keeps
//! whatever the other feeds contributed. Only an output write failure is
//! fatal.

use ahash::AHashSet;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::clean::{clean_domains, clean_ips, clean_urls};
use crate::error::Result;
use crate::feed::{Category, FeedCatalog};
use crate::fetch::Fetcher;
use crate::whitelist::Whitelist;

/// The three category accumulator sets.
///
/// Sets only ever grow during a run (union, never replace), so the merged
/// result is independent of feed processing order.
#[derive(Debug, Default)]
pub struct MergeSets {
    pub ips: AHashSet<String>,
    pub domains: AHashSet<String>,
    pub urls: AHashSet<String>,
}

impl MergeSets {
    /// Remove whitelisted entries from the domain and URL sets.
    ///
    /// The IP set is never filtered. Returns the number of entries removed
    /// from each of the two filtered sets.
    pub fn apply_whitelist(&mut self, whitelist: &Whitelist) -> (usize, usize) {
        if whitelist.is_empty() {
            return (0, 0);
        }

        let before_domains = self.domains.len();
        self.domains.retain(|d| !whitelist.matches_domain(d));
        let removed_domains = before_domains - self.domains.len();

        let before_urls = self.urls.len();
        self.urls.retain(|u| !whitelist.matches_url(u));
        let removed_urls = before_urls - self.urls.len();

        (removed_domains, removed_urls)
    }

    /// Write the three output files into `dir`, creating it if needed.
    ///
    /// One entry per line, sorted ascending in byte order, `\n` terminated.
    pub fn write(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)?;
        for category in [Category::Ip, Category::Domain, Category::Url] {
            let path = dir.join(format!("{}.txt", category.name()));
            write_sorted(&path, self.entries(category))?;
        }
        Ok(())
    }

    fn entries(&self, category: Category) -> &AHashSet<String> {
        match category {
            Category::Ip => &self.ips,
            Category::Domain => &self.domains,
            Category::Url => &self.urls,
        }
    }
}

fn write_sorted(path: &Path, entries: &AHashSet<String>) -> Result<()> {
    let mut sorted: Vec<&str> = entries.iter().map(String::as_str).collect();
    sorted.sort_unstable();

    let mut body = String::with_capacity(sorted.iter().map(|e| e.len() + 1).sum());
    for entry in sorted {
        body.push_str(entry);
        body.push('\n');
    }
    fs::write(path, body)?;
    Ok(())
}

/// Counts from a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct MergeReport {
    /// Entries in the IP output.
    pub ips: usize,
    /// Entries in the domain output, after filtering.
    pub domains: usize,
    /// Entries in the URL output, after filtering.
    pub urls: usize,
    /// Domain entries removed by the whitelist.
    pub whitelisted_domains: usize,
    /// URL entries removed by the whitelist.
    pub whitelisted_urls: usize,
}

impl MergeReport {
    /// One-line human summary for standard output.
    pub fn summary(&self) -> String {
        format!(
            "IPs: {}  Domains: {} ({} whitelisted)  URLs: {} ({} whitelisted)",
            self.ips, self.domains, self.whitelisted_domains, self.urls, self.whitelisted_urls
        )
    }
}

/// Fetch and clean every feed in the catalog, unioning per category.
///
/// Fetch failures are logged and skipped; this function itself cannot
/// fail.
pub fn merge<F: Fetcher>(catalog: &FeedCatalog, fetcher: &F) -> MergeSets {
    let mut sets = MergeSets::default();

    for category in [Category::Ip, Category::Domain, Category::Url] {
        for feed in catalog.feeds(category) {
            let text = match fetcher.fetch(&feed.url) {
                Ok(text) => text,
                Err(e) => {
                    log::warn!("[{}] {} -> {}", category.tag(), feed.url, e);
                    continue;
                }
            };

            match category {
                Category::Ip => union_into(&mut sets.ips, clean_ips(&text), category, &feed.url),
                Category::Domain => {
                    union_into(&mut sets.domains, clean_domains(&text), category, &feed.url)
                }
                Category::Url => union_into(
                    &mut sets.urls,
                    clean_urls(&text, feed.format),
                    category,
                    &feed.url,
                ),
            }
        }
    }

    sets
}

fn union_into(set: &mut AHashSet<String>, entries: AHashSet<String>, category: Category, url: &str) {
    let before = set.len();
    set.extend(entries);
    log::debug!("[{}] {} -> {} new entries", category.tag(), url, set.len() - before);
}

/// Full run: merge, filter, write outputs, report counts.
pub fn run<F: Fetcher>(
    catalog: &FeedCatalog,
    fetcher: &F,
    whitelist: &Whitelist,
    out_dir: &Path,
) -> Result<MergeReport> {
    let mut sets = merge(catalog, fetcher);
    let (whitelisted_domains, whitelisted_urls) = sets.apply_whitelist(whitelist);
    sets.write(out_dir)?;

    Ok(MergeReport {
        ips: sets.ips.len(),
        domains: sets.domains.len(),
        urls: sets.urls.len(),
        whitelisted_domains,
        whitelisted_urls,
    })
}
