//! Mock gateway for testing the messenger service

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::entities::delivery::{ProviderCredentials, ProviderResponse};
use crate::errors::TransportError;
use crate::services::provider::ProviderClient;

/// One captured `deliver` call
#[derive(Debug, Clone)]
pub struct SentMessage {
    pub recipient: String,
    pub sender_id: String,
    pub api_key: String,
    pub message: String,
}

pub struct MockProvider {
    pub sent: Arc<Mutex<Vec<SentMessage>>>,
    reply: Result<ProviderResponse, TransportError>,
}

impl MockProvider {
    pub fn replying(status: u16, body: &str) -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            reply: Ok(ProviderResponse::new(status, body)),
        }
    }

    pub fn failing(error: TransportError) -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            reply: Err(error),
        }
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProviderClient for MockProvider {
    async fn deliver(
        &self,
        recipient: &str,
        credentials: &ProviderCredentials,
        message: &str,
    ) -> Result<ProviderResponse, TransportError> {
        self.sent.lock().unwrap().push(SentMessage {
            recipient: recipient.to_string(),
            sender_id: credentials.sender_id().to_string(),
            api_key: credentials.api_key().to_string(),
            message: message.to_string(),
        });
        self.reply.clone()
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}
