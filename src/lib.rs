// src/lib.rs
// =============================================================================
// Site crawler and content extractor for automated website audits.
//
// Given a start URL, crawl() fetches the page, picks its most informative
// internal links (about, services, contact, pricing...), fetches those too,
// and returns a structured snapshot of every page: title, description,
// headings, cleaned text, counts and meta tags.
//
// Module layout:
// - fetch: the HTTP capability (PageFetcher) and per-page timeouts
// - extract: HTML -> PageContent, link classification, navigation labels
// - crawl: options, URL scoring and the crawl itself
// - error: FetchError / CrawlError
// =============================================================================

pub mod crawl;
pub mod error;
pub mod extract;
pub mod fetch;

pub use crawl::{crawl, crawl_with, scrape_page, score_url, CrawlOptions, MultiPageScrapeResult};
pub use error::{CrawlError, FetchError};
pub use extract::PageContent;
pub use fetch::{HttpFetcher, PageFetcher};
