//! Error types for feedmerge.

use thiserror::Error;

/// Error type for feedmerge operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Feed download failed at the transport level
    #[error("download error: {0}")]
    Download(#[from] reqwest::Error),

    /// Feed download returned a non-success HTTP status
    #[error("HTTP status {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    /// Gzip decompression of a feed body failed
    #[error("gzip decompression failed: {0}")]
    Decompress(std::io::Error),

    /// Feed body is not valid UTF-8 text
    #[error("feed body is not valid UTF-8")]
    NotText,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for feedmerge operations.
pub type Result<T> = std::result::Result<T, Error>;
