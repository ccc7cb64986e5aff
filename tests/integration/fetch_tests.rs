use lead_extractor::config::FetchConfig;
use lead_extractor::page::Fetcher;
use lead_extractor::FetchError;
use std::time::Duration;
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_fetch_success() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>hello</p>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::new(&FetchConfig::default()).unwrap();
    let page = fetcher
        .fetch(&format!("{}/page", mock_server.uri()))
        .await
        .expect("Fetch failed");

    assert_eq!(page.status, 200);
    assert_eq!(page.body, "<p>hello</p>");
    assert_eq!(page.final_url.path(), "/page");
}

#[tokio::test]
async fn test_server_error_not_retried() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::new(&FetchConfig::default()).unwrap();
    let result = fetcher.fetch(&mock_server.uri()).await;

    assert!(matches!(result, Err(FetchError::Status { status: 503, .. })));
}

#[tokio::test]
async fn test_timeout() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let config = FetchConfig {
        timeout_secs: 1,
        ..FetchConfig::default()
    };
    let fetcher = Fetcher::new(&config).unwrap();
    let result = fetcher.fetch(&mock_server.uri()).await;

    match result {
        Err(FetchError::Timeout { seconds, .. }) => assert_eq!(seconds, 1),
        other => panic!("expected timeout, got {:?}", other),
    }
}

#[tokio::test]
async fn test_redirect_chain_followed() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(ResponseTemplate::new(302).insert_header("location", "/b"))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(ResponseTemplate::new(307).insert_header("location", "/c"))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/c"))
        .respond_with(ResponseTemplate::new(200).set_body_string("done"))
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::new(&FetchConfig::default()).unwrap();
    let page = fetcher
        .fetch(&format!("{}/a", mock_server.uri()))
        .await
        .expect("Fetch failed");

    assert_eq!(page.final_url.path(), "/c");
    assert_eq!(page.body, "done");
}
