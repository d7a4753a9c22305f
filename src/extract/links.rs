// src/extract/links.rs
// =============================================================================
// This module classifies the links on a page as internal or external.
//
// Only two href forms are understood:
// - absolute http:// or https:// URLs, classified by hostname
// - root-relative paths ("/about"), always internal
//
// Everything else (mailto:, tel:, javascript:, "#top", "//cdn.host/x",
// "page.html", broken URLs) is skipped silently. Relative paths without a
// leading slash are deliberately not resolved.
//
// Rust concepts:
// - Option<T>: "this href produced no link" is just None
// - HashSet: de-duplication while keeping discovery order in a Vec
// =============================================================================

use super::selector;
use scraper::Html;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use url::Url;

/// How strictly a link's hostname must match the base page's hostname to
/// count as internal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkScope {
    /// The hostnames must be identical strings
    #[default]
    Exact,
    /// Subdomains of the base hostname also count ("blog.example.se" for
    /// "example.se"); the reverse does not
    WithSubdomains,
}

impl LinkScope {
    pub fn from_include_subdomains(include_subdomains: bool) -> Self {
        if include_subdomains {
            Self::WithSubdomains
        } else {
            Self::Exact
        }
    }

    /// Checks whether `host` belongs to the site hosted at `base_host`
    pub fn is_internal(self, host: &str, base_host: &str) -> bool {
        if host == base_host {
            return true;
        }
        match self {
            Self::Exact => false,
            Self::WithSubdomains => host
                .strip_suffix(base_host)
                .is_some_and(|prefix| prefix.len() > 1 && prefix.ends_with('.')),
        }
    }
}

/// The links found on one page, each list de-duplicated and in the order
/// the links first appear in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedLinks {
    pub internal: Vec<Url>,
    pub external: Vec<Url>,
}

enum LinkKind {
    Internal(Url),
    External(Url),
}

/// Extracts and classifies every `<a href>` on the page.
///
/// Example (base = "https://example.se"):
///   href="/kontakt"            -> internal https://example.se/kontakt
///   href="https://other.se/x"  -> external https://other.se/x
///   href="mailto:a@b.se"       -> ignored
pub fn extract_links(document: &Html, base: &Url, scope: LinkScope) -> ExtractedLinks {
    let mut links = ExtractedLinks::default();

    let Some(base_host) = base.host_str() else {
        return links;
    };

    let mut seen = HashSet::new();
    for element in document.select(&selector("a[href]")) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        match classify_href(base, base_host, href, scope) {
            Some(LinkKind::Internal(url)) => {
                if seen.insert(url.clone()) {
                    links.internal.push(url);
                }
            }
            Some(LinkKind::External(url)) => {
                if seen.insert(url.clone()) {
                    links.external.push(url);
                }
            }
            None => {}
        }
    }

    links
}

fn classify_href(base: &Url, base_host: &str, href: &str, scope: LinkScope) -> Option<LinkKind> {
    if href.starts_with("http://") || href.starts_with("https://") {
        let url = Url::parse(href).ok()?;
        let host = url.host_str()?;
        if scope.is_internal(host, base_host) {
            Some(LinkKind::Internal(url))
        } else {
            Some(LinkKind::External(url))
        }
    } else if href.starts_with('/') && !href.starts_with("//") {
        base.join(href).ok().map(LinkKind::Internal)
    } else {
        None
    }
}
