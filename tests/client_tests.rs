//! End-to-end tests for the client facade over a mock transport.

use integrations_tempmail::fixtures;
use integrations_tempmail::mocks::MockHttpTransport;
use integrations_tempmail::types::CreateAccountRequest;
use integrations_tempmail::{
    AnalysisReport, TempMailClient, TempMailClientBuilder, TempMailConfig,
};
use std::sync::Arc;
use std::time::Duration;

fn test_config() -> TempMailConfig {
    TempMailConfig::builder()
        .base_url("https://api.mail.test")
        .unwrap()
        .proxy_url("https://relay.test/raw")
        .unwrap()
        .domain_retry_delay(Duration::from_millis(10))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_provision_then_poll_inbox() {
    // Full flow: discover domains, create an account, list the inbox and
    // fetch one message body, all over one scripted transport.
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(200, fixtures::DOMAIN_CATALOG_MIXED);
    transport.enqueue_json_response(201, fixtures::ACCOUNT_CREATED);
    transport.enqueue_json_response(200, fixtures::TOKEN_OK);
    transport.enqueue_json_response(200, fixtures::ME_OK);
    transport.enqueue_json_response(200, fixtures::MESSAGE_LIST);
    transport.enqueue_json_response(200, fixtures::MESSAGE_DETAIL_HTML);

    let client = TempMailClientBuilder::from_config(test_config())
        .transport(transport.clone())
        .build()
        .unwrap();

    let session = client
        .create_account(CreateAccountRequest::random())
        .await
        .unwrap();
    // The only active catalog entry is a.com; the inactive one must not be picked.
    assert!(session.email_address.ends_with("@a.com"));
    assert_eq!(session.account_id, "acct-1");

    let messages = client.list_messages(&session).await;
    assert_eq!(messages.len(), 2);

    let detail = client.message_detail(&session, "m2").await.unwrap();
    assert_eq!(detail.body, "<p>Hello</p><p>World</p>");

    transport.verify_request_count(6);
}

#[tokio::test]
async fn test_delete_through_facade() {
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(200, fixtures::DOMAIN_CATALOG_ACTIVE);
    transport.enqueue_json_response(201, fixtures::ACCOUNT_CREATED);
    transport.enqueue_json_response(200, fixtures::TOKEN_OK);
    transport.enqueue_json_response(200, fixtures::ME_OK);
    transport.enqueue_json_response(204, "");

    let client = TempMailClientBuilder::from_config(test_config())
        .transport(transport.clone())
        .build()
        .unwrap();

    let session = client
        .create_account(CreateAccountRequest::random())
        .await
        .unwrap();
    assert!(client.delete_message(&session, "m1").await);
}

#[tokio::test]
async fn test_analyzer_defaults_to_canned_without_credentials() {
    let transport = Arc::new(MockHttpTransport::new());

    let client = TempMailClientBuilder::from_config(test_config())
        .transport(transport.clone())
        .build()
        .unwrap();

    let report = client.analyze_message("subject", "body").await;
    assert_eq!(report, AnalysisReport::unavailable());
    // No credential, no network call.
    transport.verify_request_count(0);
}

#[tokio::test]
async fn test_list_active_domains_through_facade() {
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(200, fixtures::DOMAIN_CATALOG_MIXED);

    let client = TempMailClientBuilder::from_config(test_config())
        .transport(transport.clone())
        .build()
        .unwrap();

    let domains = client.list_active_domains().await;
    assert_eq!(domains.len(), 1);
    assert_eq!(domains[0].domain, "a.com");
}
