//! Feedmerge - a threat-intelligence feed aggregator.
//!
//! This crate merges public blocklist feeds (malicious IPs, domains and
//! URLs) into three deduplicated, normalized, sorted output lists, with an
//! optional whitelist suppression pass.
//!
//! # Features
//!
//! - **Normalization pipeline**: pure cleaners turn heterogeneous feed
//!   text (hosts files, CSV exports, plain lists, netset files) into
//!   canonical validated entries
//! - **Three categories**: IPv4 addresses, domain names, absolute URLs
//! - **Whitelist filtering**: exact and subdomain suffix matching over the
//!   domain and URL outputs
//! - **Failure isolation**: a feed that cannot be fetched is logged and
//!   skipped without aborting the run
//! - **Deterministic output**: sorted, one entry per line, regardless of
//!   feed order
//!
//! # Quick Start
//!
//! ```ignore
//! use feedmerge::{merge, FeedCatalog, HttpFetcher, Whitelist};
//! use std::path::Path;
//!
//! let catalog = FeedCatalog::default();
//! let fetcher = HttpFetcher::new()?;
//! let whitelist = Whitelist::load("whitelist.txt")?;
//!
//! let report = feedmerge::run(&catalog, &fetcher, &whitelist, Path::new("docs"))?;
//! println!("{}", report.summary());
//! ```
//!
//! # Pipeline
//!
//! Each configured feed is fetched sequentially with a fixed timeout,
//! cleaned by its category's cleaner, and unioned into the category set.
//! Lines that fail validation are expected noise and dropped silently.
//! After aggregation the whitelist pass removes covered domains and URLs
//! (never IPs), and the sets are written sorted ascending.

mod error;

pub mod clean;
pub mod feed;
pub mod fetch;
pub mod merge;
pub mod normalize;
pub mod validate;
pub mod whitelist;

// Re-export core types
pub use error::{Error, Result};

// Re-export the catalog types
pub use feed::{Category, Feed, FeedCatalog, UrlFormat};

// Re-export the pipeline entry points
pub use clean::{clean_domains, clean_ips, clean_urls};
pub use merge::{merge, run, MergeReport, MergeSets};

// Re-export retrieval
pub use fetch::{Fetcher, HttpFetcher, FETCH_TIMEOUT};

// Re-export whitelist filtering
pub use whitelist::{url_host, Whitelist};
