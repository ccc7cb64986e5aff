use crate::{create_test_config, file_count};
use lead_extractor::extract::Platform;
use lead_extractor::pipeline::extract_leads;
use lead_extractor::{run, FetchError, LeadError, WriteError};
use calamine::{open_workbook, Reader, Xlsx};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CONTACT_PAGE: &str = r#"<html><head><title>Acme</title></head><body>
    <p>Contact us: jane@acme.com or JANE@ACME.COM</p>
    <a href="mailto:info@acme.com">Email</a>
    <a href="https://twitter.com/acme">Twitter</a>
    <a href="/about">About</a>
    </body></html>"#;

async fn serve(mock_server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_full_run_writes_both_reports() {
    let mock_server = MockServer::start().await;
    serve(&mock_server, "/", CONTACT_PAGE).await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = create_test_config(&dir);

    let summary = run(&mock_server.uri(), &config)
        .await
        .expect("Run failed");

    assert_eq!(summary.emails, 3);
    assert_eq!(summary.social_links, 1);
    assert_eq!(summary.paths.csv, dir.path().join("leads.csv"));
    assert_eq!(summary.paths.xlsx, dir.path().join("leads.xlsx"));

    let csv = std::fs::read_to_string(&summary.paths.csv).expect("Missing CSV");
    assert_eq!(
        csv,
        "type,value\n\
         Email,JANE@ACME.COM\n\
         Email,info@acme.com\n\
         Email,jane@acme.com\n\
         Twitter,https://twitter.com/acme\n"
    );

    let mut workbook: Xlsx<_> = open_workbook(&summary.paths.xlsx).expect("Missing XLSX");
    assert_eq!(workbook.sheet_names(), vec!["Leads"]);

    let sheet_rows: Vec<Vec<String>> = workbook
        .worksheet_range("Leads")
        .expect("Missing Leads sheet")
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();
    let csv_rows: Vec<Vec<String>> = csv
        .lines()
        .map(|line| line.split(',').map(str::to_string).collect())
        .collect();
    assert_eq!(sheet_rows, csv_rows);

    assert!(summary
        .message()
        .starts_with("Saved 3 emails and 1 social links to "));
}

#[tokio::test]
async fn test_page_without_contacts_writes_header_only() {
    let mock_server = MockServer::start().await;
    serve(&mock_server, "/", "<html><body><p>Nothing here</p></body></html>").await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let summary = run(&mock_server.uri(), &create_test_config(&dir))
        .await
        .expect("Run failed");

    assert_eq!(summary.emails, 0);
    assert_eq!(summary.social_links, 0);
    assert_eq!(
        std::fs::read_to_string(&summary.paths.csv).unwrap(),
        "type,value\n"
    );
    assert_eq!(file_count(&dir), 2);
}

#[tokio::test]
async fn test_links_resolve_against_redirect_target() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", "/new/team"))
        .mount(&mock_server)
        .await;
    serve(
        &mock_server,
        "/new/team",
        r#"<a href="https://www.linkedin.com/company/acme">in</a><a href="people">p</a>"#,
    )
    .await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let (final_url, extraction) = extract_leads(
        &format!("{}/old", mock_server.uri()),
        &create_test_config(&dir),
    )
    .await
    .expect("Extraction failed");

    assert_eq!(final_url.path(), "/new/team");
    assert!(extraction
        .social
        .get(Platform::LinkedIn)
        .contains("https://www.linkedin.com/company/acme"));
    assert_eq!(file_count(&dir), 0);
}

#[tokio::test]
async fn test_not_found_writes_nothing() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let result = run(&mock_server.uri(), &create_test_config(&dir)).await;

    match result {
        Err(LeadError::Fetch(FetchError::Status { status, .. })) => assert_eq!(status, 404),
        other => panic!("expected 404 fetch error, got {:?}", other),
    }
    assert_eq!(file_count(&dir), 0);
}

#[tokio::test]
async fn test_connection_refused_writes_nothing() {
    // Grab a free port, then close it so nothing is listening
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let dir = TempDir::new().expect("Failed to create temp dir");
    let result = run(
        &format!("http://127.0.0.1:{}/", port),
        &create_test_config(&dir),
    )
    .await;

    let err = result.expect_err("Run should fail");
    assert!(matches!(err, LeadError::Fetch(_)));
    assert!(err.to_string().starts_with("Failed to fetch URL:"));
    assert_eq!(file_count(&dir), 0);
}

#[tokio::test]
async fn test_unwritable_output_reports_write_error() {
    let mock_server = MockServer::start().await;
    serve(&mock_server, "/", CONTACT_PAGE).await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = create_test_config(&dir);
    config.output.directory = dir.path().join("does-not-exist");

    let result = run(&mock_server.uri(), &config).await;

    assert!(matches!(
        result,
        Err(LeadError::Write(WriteError::Csv { .. }))
    ));
    assert_eq!(file_count(&dir), 0);
}
