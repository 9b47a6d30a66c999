//! Feed retrieval.
//!
//! One blocking GET per feed with a fixed timeout. No retry, no backoff:
//! a failed feed is the caller's problem to log and skip.

use flate2::read::GzDecoder;
use std::io::Read;
use std::time::Duration;

use crate::error::{Error, Result};

/// Fixed per-fetch timeout. Not configurable per call.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Source of feed bodies.
///
/// The merge loop only needs "locator in, text out", so tests can swap in
/// an in-memory implementation.
pub trait Fetcher {
    /// Fetch the body of a feed as text.
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Blocking HTTP fetcher.
///
/// Non-2xx responses are errors. Gzip-compressed bodies (some mirrors
/// serve `.gz` without a content-encoding header) are decompressed
/// transparently.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Build a fetcher with the fixed timeout.
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes()?;
        let data = if is_gzip(&body) {
            let mut decoder = GzDecoder::new(&body[..]);
            let mut data = Vec::new();
            decoder.read_to_end(&mut data).map_err(Error::Decompress)?;
            data
        } else {
            body.to_vec()
        };

        String::from_utf8(data).map_err(|_| Error::NotText)
    }
}

/// Check for the gzip magic bytes.
fn is_gzip(data: &[u8]) -> bool {
    data.len() >= 2 && data[0] == 0x1f && data[1] == 0x8b
}
