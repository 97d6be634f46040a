use serde::{Deserialize, Serialize};
use validator::Validate;
use wl_core::DeliveryOutcome;

/// Body of `POST /api/v1/messages`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendMessageRequest {
    /// Staff or client user id
    #[validate(range(min = 1))]
    pub user_id: u64,

    /// Message body, sent as-is
    pub content: String,

    /// Channel type string; only "sms" is dispatched
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 32))]
    pub message_type: String,
}

/// Outcome of a send call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMessageResponse {
    /// delivered, failed, aborted or skipped
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_response: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,

    /// Machine-readable reason for an aborted send
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Channel that was not handled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
}

impl From<&DeliveryOutcome> for SendMessageResponse {
    fn from(outcome: &DeliveryOutcome) -> Self {
        let mut response = Self {
            status: outcome.status().to_string(),
            provider_response: None,
            error_detail: None,
            reason: None,
            channel: None,
        };

        match outcome {
            DeliveryOutcome::Delivered(result) | DeliveryOutcome::Failed(result) => {
                response.provider_response = result.provider_response.clone();
                response.error_detail = result.error_detail.clone();
            }
            DeliveryOutcome::Aborted(error) => {
                response.reason = Some(error.code().to_string());
                response.error_detail = Some(error.to_string());
            }
            DeliveryOutcome::Skipped { channel } => {
                response.channel = Some(channel.clone());
            }
        }

        response
    }
}

/// Query of `GET /api/v1/messages/{user_id}`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct HistoryQuery {
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<usize>,
}

impl HistoryQuery {
    pub const DEFAULT_LIMIT: usize = 20;

    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(Self::DEFAULT_LIMIT)
    }
}
