// src/crawl/options.rs
// =============================================================================
// Crawl configuration.
//
// Every field is optional when read from JSON; missing fields take the
// defaults below. The JSON names (maxPages, includeSubdomains,
// priorityPatterns, timeout) match what the audit service sends.
// =============================================================================

use crate::error::OptionsError;
use crate::extract::LinkScope;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_MAX_PAGES: usize = 4;
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Path keywords, most important first. "/contact" is left out on purpose:
/// the public contact page lives at "/kontakt".
pub const DEFAULT_PRIORITY_PATTERNS: [&str; 13] = [
    "/om",
    "/om-oss",
    "/about",
    "/tjanster",
    "/services",
    "/produkter",
    "/products",
    "/kontakt",
    "/priser",
    "/pricing",
    "/portfolio",
    "/case",
    "/referenser",
];

/// Options for one crawl
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CrawlOptions {
    /// Total page budget, the seed page included
    pub max_pages: usize,

    /// Count subdomains of the seed host as internal links
    pub include_subdomains: bool,

    /// Path substrings used to rank candidate pages; order is priority
    pub priority_patterns: Vec<String>,

    /// Timeout for each individual fetch, in milliseconds
    #[serde(rename = "timeout")]
    pub timeout_ms: u64,

    /// Upper bound on candidate fetches in flight at once.
    /// None fetches every selected candidate at the same time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concurrency: Option<usize>,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
            include_subdomains: false,
            priority_patterns: DEFAULT_PRIORITY_PATTERNS
                .iter()
                .map(|pattern| pattern.to_string())
                .collect(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            concurrency: None,
        }
    }
}

impl CrawlOptions {
    /// Loads options from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, OptionsError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| OptionsError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| OptionsError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// How many pages besides the seed may be fetched
    pub fn candidate_budget(&self) -> usize {
        self.max_pages.saturating_sub(1)
    }

    pub fn link_scope(&self) -> LinkScope {
        LinkScope::from_include_subdomains(self.include_subdomains)
    }

    /// Fetches allowed in flight for `selected` candidates (always at least 1)
    pub fn fan_out(&self, selected: usize) -> usize {
        self.concurrency.unwrap_or(selected).max(1)
    }
}
