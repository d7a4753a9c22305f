// src/extract/navigation.rs
// Collects the labels of a site's navigation links.

use super::selector;
use scraper::Html;
use std::collections::HashSet;

/// Labels this long or longer are paragraph-style links, not menu entries
pub const NAV_TEXT_MAX_CHARS: usize = 30;

const NAV_LINKS: &str = "nav a, header a, .navigation a, .menu a, #menu a";

/// Returns the distinct anchor texts found inside nav-like containers,
/// in document order.
pub fn extract_navigation(document: &Html) -> Vec<String> {
    let mut seen = HashSet::new();
    document
        .select(&selector(NAV_LINKS))
        .map(|link| link.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty() && text.chars().count() < NAV_TEXT_MAX_CHARS)
        .filter(|text| seen.insert(text.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_menu_labels_once() {
        let html = r##"
            <header><a href="/">Hem</a></header>
            <nav>
                <a href="/om">Om oss</a>
                <a href="/tjanster"> Tjänster </a>
                <a href="/om">Om oss</a>
            </nav>
            <div class="menu"><a href="/kontakt">Kontakt</a></div>
            <ul id="menu"><li><a href="/priser">Priser</a></li></ul>
            <main><a href="/blogg">Blogg</a></main>
        "##;
        let document = Html::parse_document(html);
        assert_eq!(
            extract_navigation(&document),
            vec!["Hem", "Om oss", "Tjänster", "Kontakt", "Priser"]
        );
    }

    #[test]
    fn test_skips_long_and_empty_labels() {
        let html = r#"
            <nav>
                <a href="/a"><img src="logo.png"></a>
                <a href="/b">Read our complete guide to building websites</a>
                <a href="/c">Boka ett kostnadsfritt möte</a>
            </nav>
        "#;
        let document = Html::parse_document(html);
        assert_eq!(extract_navigation(&document), vec!["Boka ett kostnadsfritt möte"]);
    }
}
