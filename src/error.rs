//! Error types for the tweetprobe tool.
//!
//! Every failure is fatal for the run, so callers only need to branch on the
//! kind of failure to report it; no variant is recovered from locally.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for tweetprobe operations.
pub type Result<T> = std::result::Result<T, TweetError>;

/// Error kinds surfaced by the credential loader and the Twitter API operations.
#[derive(Error, Debug)]
pub enum TweetError {
    /// The credential file was missing, unreadable, or malformed.
    /// Raised before any network activity takes place.
    #[error("failed to load credentials from {}: {source}", path.display())]
    ConfigLoad {
        /// Path of the env file that was requested
        path: PathBuf,
        /// Underlying loader error
        #[source]
        source: dotenvy::Error,
    },

    /// The Twitter API could not be reached (DNS, TLS, connection reset...)
    /// or the response body could not be read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The Twitter API answered with a status the operation does not accept.
    #[error("Twitter API rejected the request ({status}): {body}")]
    ServerRejection {
        /// HTTP status code
        status: u16,
        /// Raw response body, or the decoded `error` field for deletes
        body: String,
    },

    /// The response body did not have the expected JSON shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The API base URL could not be parsed for signing.
    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Reading the operator's answer or writing to the console failed.
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TweetError {
    /// Returns the HTTP status for a server rejection.
    pub fn status(&self) -> Option<u16> {
        match self {
            TweetError::ServerRejection { status, .. } => Some(*status),
            _ => None,
        }
    }
}
