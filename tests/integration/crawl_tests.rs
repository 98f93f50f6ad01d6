//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and run full crawls
//! through the reqwest-backed fetcher.

use link_crawler::config::{CrawlOptions, HttpConfig};
use link_crawler::crawler::{build_http_client, Crawler, HttpFetcher, PageFetcher};
use link_crawler::{CrawlError, FetchError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(format!("<html><body>{}</body></html>", body))
        .insert_header("content-type", "text/html")
}

fn test_http_config() -> HttpConfig {
    HttpConfig {
        user_agent: "TestBot/1.0".to_string(),
        timeout_secs: 5,
        connect_timeout_secs: 2,
        max_redirects: 5,
    }
}

fn no_probe(depth: u32) -> CrawlOptions {
    CrawlOptions::default()
        .with_check_url_exists(false)
        .with_depth(depth)
}

#[tokio::test]
async fn test_relative_and_absolute_links_deduplicate() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(&format!(
            r#"<a href="/about">About</a>
               <a href="http://other.org/x">Other</a>
               <a href="{}/about">About again</a>"#,
            base_url
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Depth 1 records /about without entering it
    Mock::given(method("GET"))
        .and(path("/about"))
        .respond_with(html(""))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut crawler = Crawler::new(&base_url, no_probe(1)).expect("Failed to create crawler");
    crawler.crawl().await;

    assert_eq!(
        crawler.internal_links().unwrap(),
        [format!("{}/about", base_url)]
    );
    assert_eq!(crawler.external_links().unwrap(), ["http://other.org/x"]);
    assert_eq!(crawler.links().len(), 2);
}

#[tokio::test]
async fn test_depth_zero_makes_no_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(html(r#"<a href="/a">A</a>"#))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = build_http_client(&test_http_config()).expect("Failed to build client");
    let mut crawler = Crawler::with_client(&mock_server.uri(), no_probe(0), client)
        .expect("Failed to create crawler");

    assert!(crawler.crawl().await.links().is_empty());
}

#[tokio::test]
async fn test_crawl_follows_internal_links_to_depth() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // Chain: / -> /level1 -> /level2 -> /level3
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(r#"<a href="/level1">1</a>"#))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/level1"))
        .respond_with(html(r#"<a href="/level2">2</a>"#))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/level2"))
        .respond_with(html(r#"<a href="/level3">3</a>"#))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut crawler = Crawler::with_http_config(&base_url, no_probe(2), &test_http_config())
        .expect("Failed to create crawler");
    crawler.crawl().await;

    assert_eq!(
        crawler.internal_links().unwrap(),
        [format!("{}/level2", base_url), format!("{}/level1", base_url)]
    );
    assert_eq!(crawler.pages_visited(), 2);
}

#[tokio::test]
async fn test_crawl_on_spawned_task() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(r#"<a href="/docs">Docs</a><a href="http://other.org/">O</a>"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut crawler = Crawler::with_http_config(&base_url, no_probe(1), &test_http_config())
        .expect("Failed to create crawler");
    let links = tokio::spawn(async move { crawler.crawl().await.links() })
        .await
        .expect("Crawl task panicked");

    assert_eq!(
        links,
        vec![format!("{}/docs", base_url), "http://other.org/".to_string()]
    );
}

#[tokio::test]
async fn test_rejects_zero_timeout() {
    let http = HttpConfig {
        timeout_secs: 0,
        ..test_http_config()
    };
    assert!(matches!(
        Crawler::with_http_config("http://example.com", CrawlOptions::default(), &http),
        Err(CrawlError::InvalidInput(_))
    ));
}

#[tokio::test]
async fn test_cyclic_pages_fetched_once() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(r#"<a href="/a">A</a><a href="/b">B</a>"#))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(html(r#"<a href="/b">B</a>"#))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(html(r#"<a href="/a">A</a>"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut crawler = Crawler::with_http_config(&base_url, no_probe(10), &test_http_config())
        .expect("Failed to create crawler");
    crawler.crawl().await;

    assert_eq!(
        crawler.internal_links().unwrap(),
        [format!("{}/a", base_url), format!("{}/b", base_url)]
    );
}

#[tokio::test]
async fn test_existence_check_excludes_failed_probes() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("HEAD"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/live"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/dead"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(r#"<a href="/live">Live</a><a href="/dead">Dead</a>"#))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/live"))
        .respond_with(html(""))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/dead"))
        .respond_with(html(""))
        .expect(0)
        .mount(&mock_server)
        .await;

    let options = CrawlOptions::default().with_depth(3);
    let mut crawler = Crawler::with_http_config(&base_url, options, &test_http_config())
        .expect("Failed to create crawler");
    crawler.crawl().await;

    assert_eq!(
        crawler.internal_links().unwrap(),
        [format!("{}/live", base_url)]
    );
    assert!(crawler.external_links().unwrap().is_empty());
}

#[tokio::test]
async fn test_existence_probe_follows_redirects() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let new_location = format!("{}/new", base_url);

    Mock::given(method("HEAD"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/old"))
        .respond_with(ResponseTemplate::new(307).insert_header("location", new_location.as_str()))
        .mount(&mock_server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/new"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(r#"<a href="/old">Moved</a>"#))
        .mount(&mock_server)
        .await;

    let options = CrawlOptions::default().with_depth(1);
    let mut crawler = Crawler::with_http_config(&base_url, options, &test_http_config())
        .expect("Failed to create crawler");
    crawler.crawl().await;

    assert_eq!(crawler.links(), vec![format!("{}/old", base_url)]);
}

#[tokio::test]
async fn test_ignored_links_never_requested() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let private = format!("{}/private", base_url);

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(r#"<a href="/private">P</a><a href="/public">Q</a>"#))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/private"))
        .respond_with(html(""))
        .expect(0)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/public"))
        .respond_with(html(""))
        .expect(1)
        .mount(&mock_server)
        .await;

    let options = no_probe(3).with_ignore_links([private.clone()]);
    let mut crawler = Crawler::with_http_config(&base_url, options, &test_http_config())
        .expect("Failed to create crawler");
    crawler.crawl().await;

    assert_eq!(crawler.links(), vec![format!("{}/public", base_url)]);
    assert!(!crawler.links().contains(&private));
}

#[tokio::test]
async fn test_only_internal_filter() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r#"<a href="/about">About</a><a href="http://other.org/x">X</a>"#,
        ))
        .mount(&mock_server)
        .await;

    let options = no_probe(1).with_only_internal(true);
    let mut crawler = Crawler::with_http_config(&base_url, options, &test_http_config())
        .expect("Failed to create crawler");
    crawler.crawl().await;

    assert_eq!(crawler.links(), vec![format!("{}/about", base_url)]);
    assert!(matches!(
        crawler.external_links(),
        Err(CrawlError::ConfigurationConflict(_))
    ));
}

#[tokio::test]
async fn test_server_errors_are_soft_skips() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(r#"<a href="/broken">Broken</a><a href="/fine">Fine</a>"#))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/fine"))
        .respond_with(html(r#"<a href="/deeper">Deeper</a>"#))
        .mount(&mock_server)
        .await;

    let mut crawler = Crawler::with_http_config(&base_url, no_probe(2), &test_http_config())
        .expect("Failed to create crawler");
    crawler.crawl().await;

    assert_eq!(
        crawler.internal_links().unwrap(),
        [
            format!("{}/broken", base_url),
            format!("{}/deeper", base_url),
            format!("{}/fine", base_url),
        ]
    );
}

#[tokio::test]
async fn test_invalid_seed_and_conflicting_filters() {
    assert!(matches!(
        Crawler::new("not a url", CrawlOptions::default()),
        Err(CrawlError::InvalidInput(_))
    ));

    let options = CrawlOptions::default()
        .with_only_internal(true)
        .with_only_external(true);
    assert!(matches!(
        Crawler::new("https://example.com", options),
        Err(CrawlError::ConfigurationConflict(_))
    ));
}

#[tokio::test]
async fn test_http_fetcher_status_handling() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(html("hello"))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/error"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let fetcher = HttpFetcher::new(&test_http_config()).expect("Failed to build client");

    let body = fetcher
        .fetch_page(&format!("{}/ok", base_url))
        .await
        .expect("Fetch failed");
    assert!(body.contains("hello"));

    let error = fetcher
        .fetch_page(&format!("{}/error", base_url))
        .await
        .unwrap_err();
    assert!(matches!(error, FetchError::Status { status: 500, .. }));

    assert_eq!(
        fetcher.probe(&format!("{}/ok", base_url)).await.unwrap(),
        200
    );
    // Unmatched requests get wiremock's default 404
    assert_eq!(
        fetcher.probe(&format!("{}/missing", base_url)).await.unwrap(),
        404
    );
}

#[tokio::test]
async fn test_http_fetcher_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(html("").set_delay(std::time::Duration::from_secs(3)))
        .mount(&mock_server)
        .await;

    let config = HttpConfig {
        timeout_secs: 1,
        ..test_http_config()
    };
    let fetcher = HttpFetcher::new(&config).expect("Failed to build client");

    let error = fetcher
        .fetch_page(&format!("{}/slow", mock_server.uri()))
        .await
        .unwrap_err();
    assert!(matches!(error, FetchError::Timeout { .. }));
}
