// src/crawl/crawler.rs
// =============================================================================
// This module runs a crawl: the seed page plus its most promising links.
//
// How it works:
// 1. Normalize the start URL (add "https://" if there is no scheme)
// 2. Fetch the seed page. If that fails the whole crawl fails.
// 3. Parse it once and extract its content, internal links and navigation
// 4. Score the internal links and keep the best (max_pages - 1)
// 5. Fetch those candidates concurrently; failures are logged and dropped
// 6. Assemble the site snapshot, pages in score order
//
// Links are only followed one hop from the seed. Nothing is kept between
// calls: every crawl builds its result from scratch.
//
// Rust concepts:
// - Generics: the crawl works with any PageFetcher
// - Streams: buffered(n) runs up to n futures at once but yields results
//   in input order, which is exactly score order here
// =============================================================================

use super::options::CrawlOptions;
use super::priority::{select_candidates, ScoredCandidate};
use super::result::MultiPageScrapeResult;
use crate::error::CrawlError;
use crate::extract::{
    extract_links, extract_navigation, extract_page_content, LinkScope, PageContent,
};
use crate::fetch::{fetch_page, HttpFetcher, PageFetcher};
use futures::stream::{self, StreamExt};
use scraper::Html;
use std::time::Duration;
use url::Url;

/// Adds "https://" to a URL typed without a scheme and trims whitespace.
///
/// Example:
///   "example.se"          -> "https://example.se"
///   " http://example.se " -> "http://example.se"
pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();
    let lowered = trimmed.to_ascii_lowercase();
    if lowered.starts_with("http://") || lowered.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Crawls a site over HTTP with a fresh client.
pub async fn crawl(
    start_url: &str,
    options: &CrawlOptions,
) -> Result<MultiPageScrapeResult, CrawlError> {
    let fetcher = HttpFetcher::new()?;
    crawl_with(&fetcher, start_url, options).await
}

/// Crawls a site using the given fetcher.
///
/// Fails only when the start URL is unusable or the main page cannot be
/// fetched. Candidate pages that fail are left out of the result.
pub async fn crawl_with<F>(
    fetcher: &F,
    start_url: &str,
    options: &CrawlOptions,
) -> Result<MultiPageScrapeResult, CrawlError>
where
    F: PageFetcher + ?Sized,
{
    let (normalized, seed) = parse_seed(start_url)?;
    let scope = options.link_scope();

    tracing::info!(url = %normalized, max_pages = options.max_pages, "starting multi-page crawl");

    let fetched = fetch_page(fetcher, &seed, options.timeout())
        .await
        .map_err(|source| CrawlError::MainPageUnavailable {
            url: normalized.clone(),
            source,
        })?;

    let seed_page = analyze_seed(&fetched.html, &normalized, &seed, fetched.response_time_ms, scope);

    let candidates = select_candidates(
        &seed_page.internal_links,
        &seed,
        &options.priority_patterns,
        options.candidate_budget(),
    );

    tracing::info!(
        internal_links = seed_page.internal_links.len(),
        selected = candidates.len(),
        "selected candidate pages"
    );

    let additional_pages = fetch_candidates(fetcher, candidates, options).await;

    tracing::info!(pages = additional_pages.len() + 1, "crawl finished");

    Ok(MultiPageScrapeResult::new(
        seed_page.content,
        additional_pages,
        seed_page.navigation,
    ))
}

/// Fetches and extracts exactly one page.
///
/// Unlike candidate pages inside a crawl, a failure here is returned to
/// the caller.
pub async fn scrape_page<F>(
    fetcher: &F,
    start_url: &str,
    options: &CrawlOptions,
) -> Result<PageContent, CrawlError>
where
    F: PageFetcher + ?Sized,
{
    let (normalized, url) = parse_seed(start_url)?;

    let fetched = fetch_page(fetcher, &url, options.timeout())
        .await
        .map_err(|source| CrawlError::MainPageUnavailable {
            url: normalized.clone(),
            source,
        })?;

    Ok(page_from_html(
        &fetched.html,
        &normalized,
        &url,
        fetched.response_time_ms,
        options.link_scope(),
    ))
}

// Everything the crawl needs from the seed page
struct SeedPage {
    content: PageContent,
    internal_links: Vec<Url>,
    navigation: Vec<String>,
}

fn parse_seed(start_url: &str) -> Result<(String, Url), CrawlError> {
    let normalized = normalize_url(start_url);
    let invalid = |reason: String| CrawlError::InvalidUrl {
        url: normalized.clone(),
        reason,
    };

    let url = Url::parse(&normalized).map_err(|e| invalid(e.to_string()))?;
    if url.host_str().is_none() {
        return Err(invalid("URL has no host".to_string()));
    }

    Ok((normalized, url))
}

// The seed HTML is parsed here, once. Html is not Send, so it must not
// live across an await point; keeping it inside this sync function
// guarantees that.
fn analyze_seed(
    html: &str,
    normalized: &str,
    seed: &Url,
    response_time_ms: u64,
    scope: LinkScope,
) -> SeedPage {
    let document = Html::parse_document(html);

    SeedPage {
        content: extract_page_content(&document, normalized, seed, response_time_ms, scope),
        internal_links: extract_links(&document, seed, scope).internal,
        navigation: extract_navigation(&document),
    }
}

fn page_from_html(
    html: &str,
    url: &str,
    base: &Url,
    response_time_ms: u64,
    scope: LinkScope,
) -> PageContent {
    let document = Html::parse_document(html);
    extract_page_content(&document, url, base, response_time_ms, scope)
}

async fn fetch_candidates<F>(
    fetcher: &F,
    candidates: Vec<ScoredCandidate>,
    options: &CrawlOptions,
) -> Vec<PageContent>
where
    F: PageFetcher + ?Sized,
{
    let fan_out = options.fan_out(candidates.len());
    let timeout = options.timeout();
    let scope = options.link_scope();

    stream::iter(candidates)
        .map(|candidate| scrape_candidate(fetcher, candidate, timeout, scope))
        .buffered(fan_out)
        .filter_map(futures::future::ready)
        .collect()
        .await
}

async fn scrape_candidate<F>(
    fetcher: &F,
    candidate: ScoredCandidate,
    timeout: Duration,
    scope: LinkScope,
) -> Option<PageContent>
where
    F: PageFetcher + ?Sized,
{
    match fetch_page(fetcher, &candidate.url, timeout).await {
        Ok(fetched) => Some(page_from_html(
            &fetched.html,
            candidate.url.as_str(),
            &candidate.url,
            fetched.response_time_ms,
            scope,
        )),
        Err(e) => {
            tracing::warn!(url = %candidate.url, score = candidate.score, error = %e, "skipping page");
            None
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. buffered vs buffer_unordered
//    - Both run up to N futures at once
//    - buffer_unordered yields results as they finish
//    - buffered yields them in the order the futures went in, so the
//      best-scored page comes first even if it was the slowest to load
//
// 2. Why is Html kept out of async code?
//    - scraper::Html is not Send (it uses non-atomic reference counting)
//    - A future holding it across an .await could not run on tokio's
//      multi-threaded runtime
//    - Parsing inside plain functions (analyze_seed, page_from_html) drops
//      the tree before the next .await
//
// 3. Why `F: PageFetcher + ?Sized`?
//    - ?Sized also allows trait objects, e.g. &dyn PageFetcher
// -----------------------------------------------------------------------------
