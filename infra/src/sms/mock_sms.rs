//! Mock SMS Gateway Implementation
//!
//! A mock gateway for development and testing. Messages are logged instead
//! of sent.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

use wl_core::{ProviderClient, ProviderCredentials, ProviderResponse, TransportError, TransportErrorKind};
use wl_shared::phone::mask_phone_number;

/// Mock gateway
///
/// This implementation:
/// - Logs messages through tracing
/// - Answers with a fixed status and a JSON body
/// - Can simulate a connection failure
/// - Tracks message count for testing
#[derive(Clone)]
pub struct MockSmsClient {
    message_count: Arc<AtomicU64>,
    simulate_failure: bool,
    status: u16,
}

impl MockSmsClient {
    /// Create a mock gateway answering 200
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
            status: 200,
        }
    }

    /// Mock gateway answering with the given status
    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            ..Self::new()
        }
    }

    /// Mock gateway that never connects
    pub fn failing() -> Self {
        Self {
            simulate_failure: true,
            ..Self::new()
        }
    }

    /// Number of messages accepted so far
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    pub fn reset_counter(&self) {
        self.message_count.store(0, Ordering::SeqCst);
    }
}

impl Default for MockSmsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProviderClient for MockSmsClient {
    async fn deliver(
        &self,
        recipient: &str,
        credentials: &ProviderCredentials,
        message: &str,
    ) -> Result<ProviderResponse, TransportError> {
        if self.simulate_failure {
            warn!(
                recipient = %mask_phone_number(recipient),
                "Mock gateway simulating connection failure"
            );
            return Err(TransportError::new(
                TransportErrorKind::Connect,
                "Mock gateway connection refused",
            ));
        }

        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;
        info!(
            recipient = %mask_phone_number(recipient),
            sender_id = credentials.sender_id(),
            length = message.chars().count(),
            count = count,
            "Mock SMS sent"
        );

        let body = serde_json::json!({
            "status": if (200..300).contains(&self.status) { "success" } else { "error" },
            "message": format!("mock-msg-{}", uuid::Uuid::new_v4()),
        });
        Ok(ProviderResponse::new(self.status, body.to_string()))
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}
