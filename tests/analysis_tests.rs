//! Integration tests for the content-safety analyzer.

use integrations_tempmail::fixtures;
use integrations_tempmail::mocks::MockHttpTransport;
use integrations_tempmail::services::{CannedContentAnalyzer, ContentAnalyzer, HttpContentAnalyzer};
use integrations_tempmail::transport::{HttpMethod, TransportError};
use integrations_tempmail::types::AnalysisReport;
use secrecy::SecretString;
use std::sync::Arc;
use url::Url;

fn create_analyzer(transport: Arc<MockHttpTransport>) -> HttpContentAnalyzer {
    HttpContentAnalyzer::new(
        Url::parse("https://ai.test/v1/analyze").unwrap(),
        SecretString::new("analyzer-key".into()),
        transport,
    )
}

#[tokio::test]
async fn test_analysis_parses_report() {
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(200, fixtures::ANALYSIS_OK);

    let analyzer = create_analyzer(transport.clone());
    let report = analyzer.analyze("Your order", "Thanks for shopping").await;

    assert_eq!(report.safety_score, 93);
    assert!(!report.is_phishing);

    transport.verify_request(0, HttpMethod::Post, "https://ai.test/v1/analyze");
    transport.verify_header(0, "Authorization", "Bearer analyzer-key");

    let body = transport.last_request().unwrap().body.unwrap();
    let payload: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let prompt = payload["prompt"].as_str().unwrap();
    assert!(prompt.contains("Your order"));
    assert!(prompt.contains("Thanks for shopping"));
}

#[tokio::test]
async fn test_failed_analysis_degrades_to_canned_report() {
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(500, "{}");

    let analyzer = create_analyzer(transport);
    let report = analyzer.analyze("s", "b").await;

    assert_eq!(report, AnalysisReport::unavailable());
}

#[tokio::test]
async fn test_transport_failure_degrades_to_canned_report() {
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_error(TransportError::Timeout);

    let analyzer = create_analyzer(transport);
    let report = analyzer.analyze("s", "b").await;

    assert_eq!(report, AnalysisReport::unavailable());
}

#[tokio::test]
async fn test_canned_analyzer_needs_no_network() {
    let report = CannedContentAnalyzer.analyze("s", "b").await;
    assert_eq!(report, AnalysisReport::unavailable());
    assert_eq!(report.safety_score, 50);
}
