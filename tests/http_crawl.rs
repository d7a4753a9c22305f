// tests/http_crawl.rs
// =============================================================================
// End-to-end crawls against a local mock HTTP server, using the real
// reqwest-backed HttpFetcher.
// =============================================================================

use httpmock::prelude::*;
use site_audit_crawler::fetch::{ACCEPT_LANGUAGE_VALUE, ACCEPT_VALUE, USER_AGENT_VALUE};
use site_audit_crawler::{crawl, CrawlError, CrawlOptions, FetchError, HttpFetcher, PageFetcher};
use std::time::Duration;
use url::Url;

const HOME: &str = r#"
<html>
  <head>
    <title>Mock Byrå</title>
    <meta name="description" content="Vi gör hemsidor">
  </head>
  <body>
    <nav><a href="/om">Om</a><a href="/kontakt">Kontakt</a></nav>
    <h1>Hej</h1>
    <a href="/tjanster">Tjänster</a>
    <a href="https://example.org/partner">Partner</a>
  </body>
</html>
"#;

fn page(title: &str) -> String {
    format!("<html><head><title>{title}</title></head><body><h1>{title}</h1></body></html>")
}

#[tokio::test]
async fn crawl_collects_seed_and_reachable_candidates() {
    let server = MockServer::start_async().await;

    let home = server
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(200)
                .header("content-type", "text/html; charset=utf-8")
                .body(HOME);
        })
        .await;
    let om = server
        .mock_async(|when, then| {
            when.method(GET).path("/om");
            then.status(200).body(page("Om oss"));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/kontakt");
            then.status(200).body(page("Kontakt"));
        })
        .await;
    let tjanster = server
        .mock_async(|when, then| {
            when.method(GET).path("/tjanster");
            then.status(500);
        })
        .await;

    let start = server.base_url();
    let result = crawl(&start, &CrawlOptions::default()).await.unwrap();

    home.assert_hits_async(1).await;
    om.assert_hits_async(1).await;
    tjanster.assert_hits_async(1).await;

    assert_eq!(result.main_page.url, start);
    assert_eq!(result.main_page.title, "Mock Byrå");
    assert_eq!(result.main_page.description, "Vi gör hemsidor");
    assert_eq!(result.main_page.links.internal, 3);
    assert_eq!(result.main_page.links.external, 1);
    assert!(!result.main_page.has_ssl);

    let titles: Vec<&str> = result.additional_pages.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Om oss", "Kontakt"]);
    assert_eq!(result.site_structure.total_pages_analyzed, 3);
    assert_eq!(
        result.site_structure.important_pages,
        vec![server.url("/om"), server.url("/kontakt")]
    );
    assert_eq!(result.site_structure.navigation_structure, vec!["Om", "Kontakt"]);
}

#[tokio::test]
async fn fetcher_sends_browser_headers() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/")
                .header("user-agent", USER_AGENT_VALUE)
                .header("accept", ACCEPT_VALUE)
                .header("accept-language", ACCEPT_LANGUAGE_VALUE);
            then.status(200).body("<p>ok</p>");
        })
        .await;

    let fetcher = HttpFetcher::new().unwrap();
    let url = Url::parse(&server.url("/")).unwrap();
    let html = fetcher.fetch(&url).await.unwrap();

    mock.assert_async().await;
    assert_eq!(html, "<p>ok</p>");
}

#[tokio::test]
async fn non_success_status_is_a_fetch_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/borta");
            then.status(410);
        })
        .await;

    let fetcher = HttpFetcher::new().unwrap();
    let url = Url::parse(&server.url("/borta")).unwrap();
    assert_eq!(fetcher.fetch(&url).await, Err(FetchError::Status(410)));
}

#[tokio::test]
async fn unreachable_seed_fails_the_crawl() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(404);
        })
        .await;

    let err = crawl(&server.base_url(), &CrawlOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CrawlError::MainPageUnavailable {
            source: FetchError::Status(404),
            ..
        }
    ));
}

#[tokio::test]
async fn slow_seed_times_out() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(200).delay(Duration::from_secs(5)).body(HOME);
        })
        .await;

    let options = CrawlOptions {
        timeout_ms: 200,
        ..CrawlOptions::default()
    };
    let err = crawl(&server.base_url(), &options).await.unwrap_err();

    assert!(matches!(
        err,
        CrawlError::MainPageUnavailable {
            source: FetchError::Timeout(_),
            ..
        }
    ));
}
