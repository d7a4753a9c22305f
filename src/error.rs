// src/error.rs
// =============================================================================
// Error types for the crawler.
//
// There are two classes of failure:
// - FetchError: one page could not be fetched. For candidate pages this is
//   absorbed (the page is simply left out of the result).
// - CrawlError: the crawl as a whole failed. This only happens when the seed
//   URL is invalid or the main page cannot be fetched (or, before any
//   request is made, when no HTTP client can be built).
// - OptionsError: a crawl options file could not be loaded.
// =============================================================================

use std::time::Duration;
use thiserror::Error;

/// Why a single page fetch failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The server answered with a non-2xx status code
    #[error("HTTP {0}")]
    Status(u16),

    /// The fetch did not finish within its per-page timeout
    #[error("request timed out after {} ms", .0.as_millis())]
    Timeout(Duration),

    /// Could not resolve hostname
    #[error("could not resolve hostname")]
    Dns,

    /// SSL/TLS certificate error
    #[error("SSL certificate error")]
    Tls,

    /// Too many redirects (redirect loop)
    #[error("too many redirects")]
    TooManyRedirects,

    /// The connection could not be established
    #[error("connection failed: {0}")]
    Connect(String),

    /// The response arrived but its body could not be read
    #[error("could not read response body: {0}")]
    Body(String),

    /// Anything else reqwest reports
    #[error("request failed: {0}")]
    Request(String),
}

/// A failure that aborts the whole crawl.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// The seed URL (after normalization) is not a usable http(s) URL
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The HTTP client could not be set up
    #[error("could not build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    /// Without a main page there is nothing to report
    #[error("could not fetch main page {url}: {source}")]
    MainPageUnavailable {
        url: String,
        #[source]
        source: FetchError,
    },
}

/// Crawl options could not be loaded from a file.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("could not read options file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid options file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_page_error_message() {
        let err = CrawlError::MainPageUnavailable {
            url: "https://example.se".to_string(),
            source: FetchError::Status(503),
        };
        assert_eq!(
            err.to_string(),
            "could not fetch main page https://example.se: HTTP 503"
        );
    }

    #[test]
    fn test_timeout_message() {
        let err = FetchError::Timeout(Duration::from_millis(1500));
        assert_eq!(err.to_string(), "request timed out after 1500 ms");
    }
}
