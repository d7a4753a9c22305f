// src/fetch/mod.rs
// =============================================================================
// This module fetches single pages.
//
// The crawler does not talk to reqwest directly. It is generic over the
// PageFetcher trait, so tests (and other environments) can hand it any
// HTTP capability. HttpFetcher in http.rs is the real implementation.
//
// fetch_page() is what the crawler calls: it wraps one fetch in a timeout
// and measures how long the page took to arrive.
//
// Rust concepts:
// - Traits: an interface the crawler can be generic over
// - tokio::time::timeout: drops (cancels) a future that takes too long
// =============================================================================

mod http;

pub use http::{HttpFetcher, ACCEPT_LANGUAGE_VALUE, ACCEPT_VALUE, USER_AGENT_VALUE};

use crate::error::FetchError;
use async_trait::async_trait;
use std::time::{Duration, Instant};
use url::Url;

/// Something that can GET a page and hand back its HTML.
///
/// Implementations should report non-2xx responses as
/// [`FetchError::Status`] and must not retry.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError>;
}

/// The raw result of one successful fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub html: String,
    /// Time from sending the request until the body was read
    pub response_time_ms: u64,
}

/// Fetches one page with its own timeout.
///
/// When the timeout fires only this fetch is cancelled; sibling fetches
/// running at the same time are not affected.
pub async fn fetch_page<F>(
    fetcher: &F,
    url: &Url,
    timeout: Duration,
) -> Result<FetchedPage, FetchError>
where
    F: PageFetcher + ?Sized,
{
    let started = Instant::now();

    let html = match tokio::time::timeout(timeout, fetcher.fetch(url)).await {
        Ok(result) => result?,
        Err(_) => return Err(FetchError::Timeout(timeout)),
    };

    let response_time_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    tracing::debug!(url = %url, response_time_ms, "fetched page");

    Ok(FetchedPage {
        html,
        response_time_ms,
    })
}
