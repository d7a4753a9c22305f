// src/extract/content.rs
// =============================================================================
// This module extracts the structured content of one page.
//
// The output (PageContent) is what the audit generator reads, so every
// variable-size field has a hard cap:
// - at most 15 headings
// - at most 500 words of body text
// - a 300 character preview
//
// Body text is taken after skipping <script>, <style>, <noscript> and
// <iframe> subtrees, so inline code never ends up in word counts.
// =============================================================================

use super::links::{extract_links, LinkScope};
use super::selector;
use scraper::node::Node;
use scraper::{ElementRef, Html};
use serde::{Deserialize, Serialize};
use url::Url;

/// Title used when a page has no (or an empty) `<title>`
pub const UNTITLED: &str = "Ingen titel";
pub const MAX_HEADINGS: usize = 15;
pub const MAX_TEXT_WORDS: usize = 500;
pub const PREVIEW_CHARS: usize = 300;

const SKIPPED_TAGS: [&str; 4] = ["script", "style", "noscript", "iframe"];

/// Number of distinct internal and external links on a page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkCounts {
    pub internal: usize,
    pub external: usize,
}

/// Optional `<meta name="...">` values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaTags {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub robots: Option<String>,
}

/// Everything extracted from one successfully fetched page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
    pub url: String,
    pub title: String,
    pub description: String,
    pub headings: Vec<String>,
    /// Cleaned body text, cut to the first 500 words
    pub text: String,
    /// Word count of the full cleaned text, before cutting
    pub word_count: usize,
    pub text_preview: String,
    pub images: usize,
    pub links: LinkCounts,
    pub meta: MetaTags,
    #[serde(rename = "hasSSL")]
    pub has_ssl: bool,
    /// Fetch latency in milliseconds
    pub response_time: u64,
}

/// Builds the PageContent for one parsed page.
///
/// `url` is reported as-is in the result; `base` is the same address parsed,
/// used for link resolution and the SSL flag.
pub fn extract_page_content(
    document: &Html,
    url: &str,
    base: &Url,
    response_time_ms: u64,
    scope: LinkScope,
) -> PageContent {
    let cleaned = extract_clean_text(document);
    let words: Vec<&str> = cleaned.split_whitespace().collect();
    let text = words
        .iter()
        .take(MAX_TEXT_WORDS)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    let links = extract_links(document, base, scope);

    PageContent {
        url: url.to_string(),
        title: extract_title(document),
        description: extract_description(document),
        headings: extract_headings(document),
        word_count: words.len(),
        text_preview: preview(&text),
        text,
        images: document.select(&selector("img")).count(),
        links: LinkCounts {
            internal: links.internal.len(),
            external: links.external.len(),
        },
        meta: MetaTags {
            keywords: meta_content(document, r#"meta[name="keywords"]"#),
            author: meta_content(document, r#"meta[name="author"]"#),
            viewport: meta_content(document, r#"meta[name="viewport"]"#),
            robots: meta_content(document, r#"meta[name="robots"]"#),
        },
        has_ssl: base.scheme() == "https",
        response_time: response_time_ms,
    }
}

fn extract_title(document: &Html) -> String {
    document
        .select(&selector("title"))
        .next()
        .map(|title| title.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| UNTITLED.to_string())
}

// meta description first, then Open Graph; an empty content attribute
// counts as missing
fn extract_description(document: &Html) -> String {
    [
        r#"meta[name="description"]"#,
        r#"meta[property="og:description"]"#,
    ]
    .iter()
    .filter_map(|css| meta_content(document, css))
    .find(|content| !content.is_empty())
    .unwrap_or_default()
}

fn meta_content(document: &Html, css: &str) -> Option<String> {
    document
        .select(&selector(css))
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(str::to_string)
}

fn extract_headings(document: &Html) -> Vec<String> {
    document
        .select(&selector("h1, h2, h3"))
        .map(|heading| heading.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .take(MAX_HEADINGS)
        .collect()
}

// Body text with non-prose subtrees removed and whitespace collapsed
fn extract_clean_text(document: &Html) -> String {
    let mut raw = String::new();
    if let Some(body) = document.select(&selector("body")).next() {
        collect_visible_text(body, &mut raw);
    }
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_visible_text(element: ElementRef, out: &mut String) {
    let name = element.value().name();
    if SKIPPED_TAGS.iter().any(|tag| *tag == name) {
        return;
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_visible_text(child_element, out);
                }
            }
            _ => {}
        }
    }
}

fn preview(text: &str) -> String {
    let mut preview: String = text.chars().take(PREVIEW_CHARS).collect();
    if text.chars().count() > PREVIEW_CHARS {
        preview.push_str("...");
    }
    preview
}
