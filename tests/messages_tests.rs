//! Integration tests for message listing, detail fetch and deletion.

use chrono::Utc;
use integrations_tempmail::fixtures;
use integrations_tempmail::mocks::MockHttpTransport;
use integrations_tempmail::resilience::ResilientFetcher;
use integrations_tempmail::services::{MessagesService, MessagesServiceImpl};
use integrations_tempmail::transport::{HttpMethod, TransportError};
use integrations_tempmail::types::{Session, NO_CONTENT_SENTINEL};
use integrations_tempmail::TempMailConfig;
use pretty_assertions::assert_eq;
use secrecy::SecretString;
use std::sync::Arc;

fn create_test_service(transport: Arc<MockHttpTransport>) -> MessagesServiceImpl {
    let config = Arc::new(
        TempMailConfig::builder()
            .base_url("https://api.mail.test")
            .unwrap()
            .proxy_url("https://relay.test/raw")
            .unwrap()
            .build()
            .unwrap(),
    );

    let fetcher = Arc::new(ResilientFetcher::new(transport, config.proxy_url.clone()));

    MessagesServiceImpl::new(config, fetcher)
}

fn test_session() -> Session {
    Session {
        email_address: "user@a.com".into(),
        created_at: Utc::now(),
        expires_at: None,
        is_premium: false,
        token: SecretString::new("jwt-token-value".into()),
        account_id: "acct-1".into(),
        password: SecretString::new("pw".into()),
    }
}

#[tokio::test]
async fn test_list_messages_newest_first() {
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(200, fixtures::MESSAGE_LIST);

    let service = create_test_service(transport.clone());
    let messages = service.list(&test_session()).await;

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].id, "m2");
    assert_eq!(messages[0].sender, "Bob");
    assert_eq!(messages[0].sender_address, "bob@b.com");
    assert!(!messages[0].is_read);
    assert!(!messages[0].has_full_details);
    assert_eq!(messages[1].id, "m1");
    assert!(messages[1].is_read);

    transport.verify_request(0, HttpMethod::Get, "/messages");
    transport.verify_header(0, "Authorization", "Bearer jwt-token-value");
}

#[tokio::test]
async fn test_list_failure_degrades_to_empty() {
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_error(TransportError::Connection("refused".into()));
    transport.enqueue_error(TransportError::Connection("refused".into()));

    let service = create_test_service(transport.clone());
    let messages = service.list(&test_session()).await;

    assert!(messages.is_empty());
}

#[tokio::test]
async fn test_list_unauthorized_degrades_to_empty() {
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(401, "{}");

    let service = create_test_service(transport.clone());
    let messages = service.list(&test_session()).await;

    assert!(messages.is_empty());
}

#[tokio::test]
async fn test_detail_joins_html_fragments() {
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(200, fixtures::MESSAGE_DETAIL_HTML);

    let service = create_test_service(transport.clone());
    let detail = service.detail(&test_session(), "m2").await.unwrap();

    assert_eq!(detail.body, "<p>Hello</p><p>World</p>");
    assert!(detail.summary.has_full_details);
    transport.verify_request(0, HttpMethod::Get, "/messages/m2");
}

#[tokio::test]
async fn test_detail_falls_back_to_text() {
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(200, fixtures::MESSAGE_DETAIL_TEXT);

    let service = create_test_service(transport.clone());
    let detail = service.detail(&test_session(), "m1").await.unwrap();

    assert_eq!(detail.body, "Plain body");
}

#[tokio::test]
async fn test_detail_without_content_uses_sentinel() {
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(200, r#"{"id": "m3", "subject": "Empty"}"#);

    let service = create_test_service(transport.clone());
    let detail = service.detail(&test_session(), "m3").await.unwrap();

    assert_eq!(detail.body, NO_CONTENT_SENTINEL);
}

#[tokio::test]
async fn test_detail_failure_is_none() {
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(404, "{}");

    let service = create_test_service(transport.clone());
    let detail = service.detail(&test_session(), "missing").await;

    assert!(detail.is_none());
}

#[tokio::test]
async fn test_delete_success() {
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(204, "");

    let service = create_test_service(transport.clone());
    assert!(service.delete(&test_session(), "m1").await);

    transport.verify_request(0, HttpMethod::Delete, "/messages/m1");
    transport.verify_header(0, "Authorization", "Bearer jwt-token-value");
}

#[tokio::test]
async fn test_delete_failure_is_false() {
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(404, "{}");

    let service = create_test_service(transport.clone());
    assert!(!service.delete(&test_session(), "gone").await);
}

#[tokio::test]
async fn test_delete_transport_failure_is_false() {
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_error(TransportError::Timeout);
    transport.enqueue_error(TransportError::Timeout);

    let service = create_test_service(transport.clone());
    assert!(!service.delete(&test_session(), "m1").await);
}

#[tokio::test]
async fn test_list_behind_proxy_fallback() {
    // A 403 on the direct listing is retried through the relay.
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(403, "{}");
    transport.enqueue_json_response(200, fixtures::MESSAGE_LIST);

    let service = create_test_service(transport.clone());
    let messages = service.list(&test_session()).await;

    assert_eq!(messages.len(), 2);
    transport.verify_request_count(2);
}
