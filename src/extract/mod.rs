// src/extract/mod.rs
// =============================================================================
// This module turns a parsed HTML page into structured data.
//
// Submodules:
// - content: PageContent (title, description, headings, text, counts, meta)
// - links: internal/external link classification
// - navigation: short link labels found in nav/header/menu containers
//
// Everything here works on an already-parsed scraper::Html, so a page is
// parsed once and every extractor reads the same tree.
// =============================================================================

mod content;
mod links;
mod navigation;

pub use content::{
    extract_page_content, LinkCounts, MetaTags, PageContent, MAX_HEADINGS, MAX_TEXT_WORDS,
    PREVIEW_CHARS, UNTITLED,
};
pub use links::{extract_links, ExtractedLinks, LinkScope};
pub use navigation::{extract_navigation, NAV_TEXT_MAX_CHARS};

use scraper::Selector;

// Builds a selector from one of our constant CSS strings.
//
// The selectors are fixed strings known to be valid, so a parse failure is
// a programmer error and panicking is the right response.
pub(crate) fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid built-in selector {css:?}: {e:?}"))
}
