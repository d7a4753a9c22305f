// src/crawl/mod.rs
// =============================================================================
// This module crawls a site for an audit.
//
// Unlike a general crawler it only looks one hop away from the seed page:
// it ranks the seed's internal links by how informative their paths look
// (about, services, contact, pricing...) and fetches the best few.
//
// Submodules:
// - options: CrawlOptions and their defaults
// - priority: URL scoring and candidate selection
// - crawler: the crawl itself
// - result: the site snapshot handed back to the caller
// =============================================================================

mod crawler;
mod options;
mod priority;
mod result;

pub use crawler::{crawl, crawl_with, normalize_url, scrape_page};
pub use options::{CrawlOptions, DEFAULT_MAX_PAGES, DEFAULT_PRIORITY_PATTERNS, DEFAULT_TIMEOUT_MS};
pub use priority::{score_url, select_candidates, ScoredCandidate};
pub use result::{MultiPageScrapeResult, SiteStructure};
