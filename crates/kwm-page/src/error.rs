//! Error types for page loading.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while loading or reading a page.
#[derive(Debug, Error)]
pub enum PageError {
    /// The URL is malformed or not http(s).
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The rejected URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The request failed before a response arrived (DNS, connect, timeout, TLS).
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        /// The requested URL.
        url: String,
        /// Underlying HTTP client error.
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status {
        /// The final URL after redirects.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// Failed to read a local HTML file.
    #[error("failed to read {path}: {source}")]
    ReadFile {
        /// Path to the file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A CSS selector could not be compiled.
    #[error("invalid selector '{selector}': {message}")]
    Parse {
        /// The selector text.
        selector: String,
        /// Parser message.
        message: String,
    },
}
