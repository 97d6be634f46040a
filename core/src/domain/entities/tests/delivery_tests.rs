//! Unit tests for delivery entities

use crate::domain::entities::delivery::{
    DeliveryOutcome, DeliveryRequest, DeliveryResult, DispatchStage, MessageChannel,
    ProviderCredentials, ProviderResponse,
};
use crate::domain::entities::recipient::{AccountKind, Recipient, UserId};
use crate::errors::ResolutionError;

fn recipient(address: Option<&str>) -> Recipient {
    Recipient {
        kind: AccountKind::Client,
        user_id: UserId::new(5),
        display_name: "Neema".to_string(),
        dialing_address: address.map(str::to_string),
    }
}

#[test]
fn test_channel_parsing() {
    assert_eq!(MessageChannel::parse("sms"), MessageChannel::Sms);
    assert_eq!(MessageChannel::parse(" SMS "), MessageChannel::Sms);
    assert_eq!(MessageChannel::parse("email"), MessageChannel::Email);
    assert_eq!(
        MessageChannel::parse("push"),
        MessageChannel::Other("push".to_string())
    );
    assert!(MessageChannel::from("Sms").is_sms());
    assert_eq!(MessageChannel::Email.to_string(), "email");
}

#[test]
fn test_credentials_debug_hides_api_key() {
    let credentials = ProviderCredentials::new("WEBLINE", "secret-token");
    let debug = format!("{:?}", credentials);

    assert!(debug.contains("WEBLINE"));
    assert!(!debug.contains("secret-token"));
    assert_eq!(credentials.api_key(), "secret-token");
}

#[test]
fn test_request_requires_dialing_address() {
    let request = DeliveryRequest::new(recipient(Some("255712345678")), MessageChannel::Sms, "Hi")
        .unwrap();
    assert_eq!(request.dialing_address(), "255712345678");
    assert_eq!(request.body(), "Hi");
    assert_eq!(request.user_id(), UserId::new(5));

    let error = DeliveryRequest::new(recipient(None), MessageChannel::Sms, "Hi").unwrap_err();
    assert_eq!(
        error,
        ResolutionError::MissingDialingAddress {
            user_id: UserId::new(5)
        }
    );
}

#[test]
fn test_provider_response_status_check() {
    assert!(ProviderResponse::new(200, "ok").is_http_success());
    assert!(ProviderResponse::new(204, "").is_http_success());
    assert!(!ProviderResponse::new(500, "boom").is_http_success());
    assert!(!ProviderResponse::new(302, "").is_http_success());
}

#[test]
fn test_log_payload_is_json_string() {
    let delivered = DeliveryResult::delivered(r#"{"status":"success"}"#);
    assert_eq!(delivered.log_payload(), r#""{\"status\":\"success\"}""#);

    let failed = DeliveryResult::failed("Request Error: connection refused");
    assert_eq!(failed.log_payload(), "\"Request Error: connection refused\"");
    assert!(!failed.success);
    assert!(failed.provider_response.is_none());
}

#[test]
fn test_outcome_terminal_stages() {
    let delivered = DeliveryOutcome::Delivered(DeliveryResult::delivered("ok"));
    assert_eq!(delivered.terminal_stage(), DispatchStage::Logged { success: true });
    assert!(delivered.is_delivered());
    assert_eq!(delivered.status(), "delivered");

    let failed = DeliveryOutcome::Failed(DeliveryResult::failed("x"));
    assert_eq!(failed.terminal_stage(), DispatchStage::Logged { success: false });

    let aborted = DeliveryOutcome::Aborted(ResolutionError::UserNotFound {
        user_id: UserId::new(1),
    });
    assert_eq!(aborted.terminal_stage(), DispatchStage::Aborted);
    assert!(aborted.result().is_none());

    let skipped = DeliveryOutcome::Skipped {
        channel: "email".to_string(),
    };
    assert!(skipped.terminal_stage().is_terminal());
    assert!(!DispatchStage::Sending.is_terminal());
}

#[test]
fn test_idle_stage_is_not_terminal() {
    assert!(!DispatchStage::Idle.is_terminal());
    assert_eq!(serde_json::to_value(DispatchStage::Idle).unwrap(), "idle");
    assert_eq!(
        serde_json::to_value(DispatchStage::Logged { success: true }).unwrap(),
        serde_json::json!({"logged": {"success": true}})
    );
}
