// src/fetch/http.rs
// =============================================================================
// The reqwest-backed PageFetcher.
//
// Key functionality:
// - Sends one GET per page with browser-like headers (some sites serve
//   bots a different or empty page)
// - Treats any non-2xx status as a failure
// - Sorts transport errors into DNS / TLS / redirect / connect failures
// - Never retries: a failure is final for this crawl
// =============================================================================

use super::PageFetcher;
use crate::error::FetchError;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::Client;
use url::Url;

pub const USER_AGENT_VALUE: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
pub const ACCEPT_VALUE: &str = "text/html,application/xhtml+xml";
pub const ACCEPT_LANGUAGE_VALUE: &str = "sv-SE,sv;q=0.9,en;q=0.8";

/// Fetches pages over HTTP(S) with a shared, pooled reqwest client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a fetcher with its own client.
    ///
    /// The client follows up to 10 redirects. Timeouts are not set here:
    /// each fetch gets its own timeout from the crawl options.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self { client })
    }

    /// Wraps an existing client (it is cheap to clone, connections are shared).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url.as_str())
            .header(USER_AGENT, USER_AGENT_VALUE)
            .header(ACCEPT, ACCEPT_VALUE)
            .header(ACCEPT_LANGUAGE, ACCEPT_LANGUAGE_VALUE)
            .send()
            .await
            .map_err(categorize_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))
    }
}

// Categorizes the different ways reqwest can fail before a response arrives.
//
// The interesting detail (DNS, certificate) sits further down the error's
// source chain. Only the causes are inspected: the top-level message
// contains the URL, which may itself contain "dns" or "ssl".
fn categorize_error(error: reqwest::Error) -> FetchError {
    let chain = error_chain(&error);
    let detail = chain.join(": ");
    let lowered = chain[1..].join(": ").to_lowercase();

    if error.is_redirect() {
        FetchError::TooManyRedirects
    } else if lowered.contains("dns") || lowered.contains("failed to lookup address") {
        FetchError::Dns
    } else if lowered.contains("certificate") || lowered.contains("tls") || lowered.contains("ssl") {
        FetchError::Tls
    } else if error.is_connect() {
        FetchError::Connect(detail)
    } else {
        FetchError::Request(detail)
    }
}

// The error's message followed by the messages of all its sources
fn error_chain(error: &(dyn std::error::Error + 'static)) -> Vec<String> {
    let mut parts = vec![error.to_string()];
    let mut source = error.source();
    while let Some(cause) = source {
        parts.push(cause.to_string());
        source = cause.source();
    }
    parts
}
