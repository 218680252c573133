//! Integration tests for the scraper
//!
//! These tests use wiremock to create mock HTTP servers and test the
//! full fetch-and-extract cycle end-to-end.

use page_glean::config::{FetcherConfig, ScrapeOptions};
use page_glean::glean::{build_http_client, fetch_page, RETRY_DELAY};
use page_glean::{ScrapeError, Scraper};
use std::time::{Duration, Instant};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a fetcher configuration suitable for tests
fn test_fetcher_config(timeout_ms: u64, max_retries: u32) -> FetcherConfig {
    FetcherConfig {
        timeout_ms,
        max_retries,
        ..FetcherConfig::default()
    }
}

fn html_response(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "text/html; charset=utf-8")
}

/// Fixture page: 2 h1, 1 h2, 0 h3, 8 paragraphs, 12 links, 2 images, no meta description
fn fixture_page() -> String {
    let paragraphs: String = (1..=8)
        .map(|i| format!("<p>  Paragraph {}  </p>\n", i))
        .collect();
    let links: String = (1..=12)
        .map(|i| format!("<a href=\"/page{}\">Link {}</a>\n", i, i))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head><title> Fixture Page </title></head>
<body>
<h1>Main heading</h1>
<h1>Second main heading</h1>
<h2>Sub heading</h2>
{}
{}
<a href="https://other.example.org/"></a>
<img src="images/logo.png" alt="Logo">
<img src="https://cdn.example.net/banner.jpg">
</body>
</html>"#,
        paragraphs, links
    )
}

#[tokio::test]
async fn test_full_scrape_of_fixture() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/docs/index.html"))
        .respond_with(html_response(fixture_page()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let scraper = Scraper::new(test_fetcher_config(5_000, 3)).expect("Failed to build scraper");
    let url = format!("{}/docs/index.html", base_url);
    let result = scraper.scrape(&url, None).await.expect("Scrape failed");

    assert_eq!(result.url, url);
    assert_eq!(result.title, "Fixture Page");
    assert_eq!(
        result.headings.h1,
        vec!["Main heading", "Second main heading"]
    );
    assert_eq!(result.headings.h2, vec!["Sub heading"]);
    assert!(result.headings.h3.is_empty());

    assert_eq!(result.paragraphs.len(), 5);
    assert_eq!(result.paragraphs[0], "Paragraph 1");
    assert_eq!(result.paragraphs[4], "Paragraph 5");

    assert_eq!(result.links.len(), 10);
    assert_eq!(result.links[0].text, "Link 1");
    assert_eq!(result.links[0].url, format!("{}/page1", base_url));

    assert_eq!(result.images.len(), 2);
    assert_eq!(result.images[0].alt, "Logo");
    assert_eq!(
        result.images[0].url,
        format!("{}/docs/images/logo.png", base_url)
    );
    assert_eq!(result.images[1].alt, "No alt text");
    assert_eq!(result.images[1].url, "https://cdn.example.net/banner.jpg");

    assert_eq!(result.meta_description, None);
}

#[tokio::test]
async fn test_custom_limits_and_meta_description() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_response(
            fixture_page().replace(
                "<head>",
                r#"<head><meta name="description" content="  Fixture summary "> "#,
            ),
        ))
        .mount(&mock_server)
        .await;

    let options = ScrapeOptions {
        headings_limit: 1,
        paragraphs_limit: 8,
        links_limit: 13,
        images_limit: 1,
    };
    let scraper = Scraper::new(test_fetcher_config(5_000, 3)).unwrap();
    let result = scraper
        .scrape(&format!("{}/", mock_server.uri()), Some(&options))
        .await
        .unwrap();

    assert_eq!(result.headings.h1, vec!["Main heading"]);
    assert_eq!(result.paragraphs.len(), 8);
    assert_eq!(result.links.len(), 13);
    assert_eq!(result.links[12].text, "No text");
    assert_eq!(result.links[12].url, "https://other.example.org/");
    assert_eq!(result.images.len(), 1);
    assert_eq!(result.meta_description.as_deref(), Some("Fixture summary"));
}

#[tokio::test]
async fn test_sends_configured_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("user-agent", "PageGleanTest/1.0"))
        .respond_with(html_response(
            "<html><head><title>UA ok</title></head></html>".to_string(),
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = FetcherConfig {
        user_agent: "PageGleanTest/1.0".to_string(),
        ..test_fetcher_config(5_000, 1)
    };
    let scraper = Scraper::new(config).unwrap();
    let result = scraper.scrape(&mock_server.uri(), None).await.unwrap();

    assert_eq!(result.title, "UA ok");
}

#[tokio::test]
async fn test_http_404_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let scraper = Scraper::new(test_fetcher_config(5_000, 3)).unwrap();
    let err = scraper
        .scrape(&format!("{}/missing", mock_server.uri()), None)
        .await
        .unwrap_err();

    match err {
        ScrapeError::HttpStatus { status, .. } => assert_eq!(status, 404),
        other => panic!("Expected HttpStatus error, got {:?}", other),
    }

    mock_server.verify().await;
}

#[tokio::test]
async fn test_http_500_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let scraper = Scraper::new(test_fetcher_config(5_000, 3)).unwrap();
    let err = scraper.scrape(&mock_server.uri(), None).await.unwrap_err();

    assert!(matches!(err, ScrapeError::HttpStatus { status: 503, .. }));
    assert!(!err.is_transient());

    mock_server.verify().await;
}

#[tokio::test]
async fn test_json_content_is_unsupported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"title": "not html"}"#, "application/json"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let scraper = Scraper::new(test_fetcher_config(5_000, 3)).unwrap();
    let err = scraper
        .scrape(&format!("{}/api", mock_server.uri()), None)
        .await
        .unwrap_err();

    match err {
        ScrapeError::UnsupportedContent { content_type, .. } => {
            assert_eq!(content_type, "application/json")
        }
        other => panic!("Expected UnsupportedContent error, got {:?}", other),
    }

    mock_server.verify().await;
}

#[tokio::test]
async fn test_timeout_retries_then_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            html_response("<html></html>".to_string()).set_delay(Duration::from_millis(1_500)),
        )
        .expect(2)
        .mount(&mock_server)
        .await;

    let config = test_fetcher_config(200, 2);
    let client = build_http_client(&config).unwrap();
    let url = format!("{}/slow", mock_server.uri());

    let started = Instant::now();
    let err = fetch_page(&client, &url, &config).await.unwrap_err();
    let elapsed = started.elapsed();

    match err {
        ScrapeError::Timeout { attempts, .. } => assert_eq!(attempts, 2),
        other => panic!("Expected Timeout error, got {:?}", other),
    }

    // Two attempts with a single fixed wait between them
    assert!(elapsed >= RETRY_DELAY);
    assert!(elapsed < RETRY_DELAY * 2 + Duration::from_millis(900));

    mock_server.verify().await;
}

#[tokio::test]
async fn test_connection_failure_retries_then_fails() {
    // Reserve a free port, then close it so connections are refused
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let url = format!("http://127.0.0.1:{}/", port);

    let scraper = Scraper::new(test_fetcher_config(2_000, 2)).unwrap();

    let started = Instant::now();
    let err = scraper.scrape(&url, None).await.unwrap_err();

    match &err {
        ScrapeError::Connectivity { attempts, .. } => assert_eq!(*attempts, 2),
        other => panic!("Expected Connectivity error, got {:?}", other),
    }
    assert!(err.is_transient());
    assert!(started.elapsed() >= RETRY_DELAY);
}

#[tokio::test]
async fn test_invalid_url_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let scraper = Scraper::new(test_fetcher_config(5_000, 3)).unwrap();
    let host_only = mock_server.uri().replace("http://", "");
    let err = scraper.scrape(&host_only, None).await.unwrap_err();

    assert!(matches!(err, ScrapeError::InvalidInput(_)));

    mock_server.verify().await;
}

#[tokio::test]
async fn test_concurrent_scrapes_share_nothing() {
    let mock_server = MockServer::start().await;

    for i in 1..=3 {
        Mock::given(method("GET"))
            .and(path(format!("/p{}", i)))
            .respond_with(html_response(format!(
                "<html><head><title>Page {}</title></head></html>",
                i
            )))
            .mount(&mock_server)
            .await;
    }

    let scraper = Scraper::new(test_fetcher_config(5_000, 1)).unwrap();
    let base = mock_server.uri();
    let (url1, url2, url3) = (
        format!("{}/p1", base),
        format!("{}/p2", base),
        format!("{}/p3", base),
    );
    let (a, b, c) = tokio::join!(
        scraper.scrape(&url1, None),
        scraper.scrape(&url2, None),
        scraper.scrape(&url3, None),
    );

    assert_eq!(a.unwrap().title, "Page 1");
    assert_eq!(b.unwrap().title, "Page 2");
    assert_eq!(c.unwrap().title, "Page 3");
}

#[tokio::test]
async fn test_free_scrape_function_uses_defaults() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_response(fixture_page()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = format!("{}/", mock_server.uri());
    let result = page_glean::scrape(&url, None).await.expect("Scrape failed");

    assert_eq!(result.title, "Fixture Page");
    assert_eq!(result.paragraphs.len(), 5);
    assert_eq!(result.links.len(), 10);
    assert_eq!(result.images.len(), 2);

    let err = page_glean::scrape("not a url", None).await.unwrap_err();
    assert!(matches!(err, ScrapeError::InvalidInput(_)));

    mock_server.verify().await;
}

#[tokio::test]
async fn test_corrupt_gzip_body_is_unexpected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("definitely not gzip data", "text/html")
                .insert_header("content-encoding", "gzip"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let scraper = Scraper::new(test_fetcher_config(5_000, 3)).unwrap();
    let err = scraper
        .scrape(&format!("{}/broken", mock_server.uri()), None)
        .await
        .unwrap_err();

    match &err {
        ScrapeError::Unexpected { url, .. } => assert!(url.ends_with("/broken")),
        other => panic!("Expected Unexpected error, got {:?}", other),
    }
    assert!(!err.is_transient());

    mock_server.verify().await;
}
