// src/crawl/result.rs
// The site snapshot returned by a crawl.

use crate::extract::PageContent;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteStructure {
    /// The main page plus every additional page that was fetched
    pub total_pages_analyzed: usize,
    /// URLs of the additional pages, in score order
    pub important_pages: Vec<String>,
    /// Short link labels from the main page's navigation areas
    pub navigation_structure: Vec<String>,
}

/// Everything gathered by one crawl.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiPageScrapeResult {
    pub main_page: PageContent,
    /// Successfully fetched candidates, best score first
    pub additional_pages: Vec<PageContent>,
    pub site_structure: SiteStructure,
}

impl MultiPageScrapeResult {
    pub fn new(
        main_page: PageContent,
        additional_pages: Vec<PageContent>,
        navigation_structure: Vec<String>,
    ) -> Self {
        let site_structure = SiteStructure {
            total_pages_analyzed: 1 + additional_pages.len(),
            important_pages: additional_pages.iter().map(|page| page.url.clone()).collect(),
            navigation_structure,
        };

        Self {
            main_page,
            additional_pages,
            site_structure,
        }
    }

    /// The main page followed by the additional pages
    pub fn pages(&self) -> impl Iterator<Item = &PageContent> {
        std::iter::once(&self.main_page).chain(self.additional_pages.iter())
    }
}
