//! Unit tests for the mock gateway

use wl_core::{ProviderClient, ProviderCredentials, TransportErrorKind};

use crate::sms::MockSmsClient;

fn credentials() -> ProviderCredentials {
    ProviderCredentials::new("WEBLINE", "test-key")
}

#[tokio::test]
async fn test_mock_sms_send_success() {
    let client = MockSmsClient::new();

    let response = client
        .deliver("255712345678", &credentials(), "Test message")
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["status"], "success");
    assert!(body["message"].as_str().unwrap().starts_with("mock-msg-"));
    assert_eq!(client.get_message_count(), 1);
}

#[tokio::test]
async fn test_mock_sms_fixed_status() {
    let client = MockSmsClient::with_status(500);

    let response = client
        .deliver("255712345678", &credentials(), "Test message")
        .await
        .unwrap();

    assert_eq!(response.status, 500);
    assert!(!response.is_http_success());
}

#[tokio::test]
async fn test_mock_sms_simulate_failure() {
    let client = MockSmsClient::failing();

    let error = client
        .deliver("255712345678", &credentials(), "Test message")
        .await
        .unwrap_err();

    assert_eq!(error.kind, TransportErrorKind::Connect);
    assert_eq!(client.get_message_count(), 0);
}

#[tokio::test]
async fn test_mock_sms_counter_shared_between_clones() {
    let client = MockSmsClient::new();
    let clone = client.clone();

    client.deliver("255700000001", &credentials(), "a").await.unwrap();
    clone.deliver("255700000002", &credentials(), "b").await.unwrap();

    assert_eq!(client.get_message_count(), 2);
    client.reset_counter();
    assert_eq!(clone.get_message_count(), 0);
}
