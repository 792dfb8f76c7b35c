// ABOUTME: Error types for page fetching and text extraction.
// ABOUTME: Provides ExtractError with InvalidUrl, Fetch, and HttpStatus variants.

use thiserror::Error;

/// Errors that can occur while turning a URL into plain text.
/// All of these are per-URL failures; the caller skips the URL and moves on.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The URL string did not parse.
    #[error("invalid url {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A transport-level failure: DNS, connection refused, timeout,
    /// or a body that could not be read.
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a client or server error status.
    #[error("fetch {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },
}
