//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: config → paginated HTTP requests →
//! extraction → JSON Lines output

use ctgov_connector::cli::Runner;
use ctgov_connector::config::ConnectorConfig;
use ctgov_connector::engine::{DriverConfig, PaginationDriver};
use ctgov_connector::http::{HttpClient, HttpClientConfig};
use ctgov_connector::output::JsonlWriter;
use ctgov_connector::pagination::StopReason;
use ctgov_connector::{Error, NormalizedRecord};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const STUDIES_PATH: &str = "/api/v2/studies";

fn study(id: &str, title: &str, country: &str) -> Value {
    json!({
        "protocolSection": {
            "identificationModule": {"nctId": id, "officialTitle": title},
            "statusModule": {"overallStatus": "RECRUITING", "lastUpdatePostDate": "2024-04-02"},
            "designModule": {"phases": ["PHASE2", "PHASE3"]},
            "conditionsModule": {"conditions": ["Alzheimer Disease"]},
            "contactsLocationsModule": {"locations": [{"country": country}, {"city": "?"}]}
        }
    })
}

async fn mount_two_pages(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(STUDIES_PATH))
        .and(query_param("query.cond", "Alzheimer"))
        .and(query_param_is_missing("pageToken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "studies": [
                study("NCT00000001", "Première étude", "France"),
                {"protocolSection": {"identificationModule": {"briefTitle": "no id"}}}
            ],
            "nextPageToken": "tok1",
            "totalCount": 3
        })))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(STUDIES_PATH))
        .and(query_param("pageToken", "tok1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "studies": [study("NCT00000002", "Second", "Japan")]
        })))
        .expect(1)
        .mount(server)
        .await;
}

fn client(server: &MockServer) -> HttpClient {
    HttpClient::with_config(
        HttpClientConfig::builder()
            .base_url(format!("{}{STUDIES_PATH}", server.uri()))
            .timeout(Duration::from_secs(5))
            .build(),
    )
    .unwrap()
}

fn driver_config(max_pages: u32) -> DriverConfig {
    DriverConfig::new("Alzheimer")
        .with_page_size(2)
        .with_max_pages(max_pages)
        .with_page_delay(Duration::ZERO)
}

// ============================================================================
// End-to-end pipeline
// ============================================================================

#[tokio::test]
async fn test_pipeline_walks_pages_and_writes_jsonl() {
    let server = MockServer::start().await;
    mount_two_pages(&server).await;

    let driver = PaginationDriver::new(client(&server), driver_config(10));
    let mut writer = JsonlWriter::new(Vec::new());
    let summary = driver.run(&mut writer).await.unwrap();

    assert_eq!(summary.pages_fetched, 2);
    assert_eq!(summary.records_emitted, 2);
    assert_eq!(summary.records_skipped, 1);
    assert_eq!(summary.stop_reason, StopReason::NoNextCursor);

    let output = String::from_utf8(writer.into_inner()).unwrap();
    assert!(output.contains("Première étude"));

    let records: Vec<NormalizedRecord> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(records.len(), 2);

    let first = &records[0];
    assert_eq!(first.nct_id.as_deref(), Some("NCT00000001"));
    assert_eq!(first.phase.as_deref(), Some("PHASE2, PHASE3"));
    assert_eq!(first.last_changed_date.as_deref(), Some("2024-04-02"));
    assert_eq!(first.locations.len(), 1);
    assert_eq!(first.locations[0].country, "France");
    assert_eq!(records[1].nct_id.as_deref(), Some("NCT00000002"));
}

#[tokio::test]
async fn test_pipeline_respects_page_cap() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(STUDIES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "studies": [study("NCT1", "T", "Canada")],
            "nextPageToken": "more"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let driver = PaginationDriver::new(client(&server), driver_config(1));
    let mut writer = JsonlWriter::new(Vec::new());
    let summary = driver.run(&mut writer).await.unwrap();

    assert_eq!(summary.pages_fetched, 1);
    assert_eq!(summary.stop_reason, StopReason::PageCapReached);
    assert_eq!(writer.written(), 1);
}

#[tokio::test]
async fn test_pipeline_server_error_keeps_earlier_output() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(STUDIES_PATH))
        .and(query_param_is_missing("pageToken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "studies": [study("NCT1", "T", "Canada")],
            "nextPageToken": "tok1"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(STUDIES_PATH))
        .and(query_param("pageToken", "tok1"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&server)
        .await;

    let driver = PaginationDriver::new(client(&server), driver_config(10));
    let mut writer = JsonlWriter::new(Vec::new());
    let err = driver.run(&mut writer).await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 502, .. }));
    assert_eq!(writer.written(), 1);
    let output = String::from_utf8(writer.into_inner()).unwrap();
    assert!(output.contains("NCT1"));
    assert!(!output.contains("502"));
}

#[tokio::test]
async fn test_runner_writes_to_output_file() {
    let server = MockServer::start().await;
    mount_two_pages(&server).await;

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("trials.jsonl");

    let config = ConnectorConfig::new()
        .with_base_url(format!("{}{STUDIES_PATH}", server.uri()))
        .with_search("Alzheimer")
        .with_page_size(2)
        .with_sleep_secs(0.0)
        .with_timeout_secs(5)
        .with_output(Some(out.clone()));

    let summary = Runner::from_config(config).unwrap().run().await.unwrap();
    assert_eq!(summary.records_emitted, 2);

    let contents = std::fs::read_to_string(&out).unwrap();
    let ids: Vec<String> = contents
        .lines()
        .map(|l| serde_json::from_str::<Value>(l).unwrap()["nct_id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["NCT00000001", "NCT00000002"]);
}

#[tokio::test]
async fn test_runner_rejects_invalid_config_without_fetching() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"studies": []})))
        .expect(0)
        .mount(&server)
        .await;

    let config = ConnectorConfig::new()
        .with_base_url(server.uri())
        .with_page_size(0);

    let err = Runner::from_config(config).err().unwrap();
    assert!(err.is_config());
}
