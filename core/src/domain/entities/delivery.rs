//! Delivery entities: what is sent, with which credentials, and what came back.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::recipient::{Recipient, UserId};
use crate::errors::ResolutionError;

/// Channel a message is requested on
///
/// The host passes the channel as a free-form type string; only SMS is
/// dispatched by this messenger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageChannel {
    Sms,
    Email,
    Other(String),
}

impl MessageChannel {
    /// Parse the host's type string (case-insensitive)
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "sms" => Self::Sms,
            "email" => Self::Email,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn is_sms(&self) -> bool {
        matches!(self, Self::Sms)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Sms => "sms",
            Self::Email => "email",
            Self::Other(value) => value,
        }
    }
}

impl From<&str> for MessageChannel {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for MessageChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gateway credentials supplied by the host's messenger configuration
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderCredentials {
    sender_id: String,
    api_key: String,
}

impl ProviderCredentials {
    pub fn new(sender_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            sender_id: sender_id.into(),
            api_key: api_key.into(),
        }
    }

    /// Registered sender name shown on the handset
    pub fn sender_id(&self) -> &str {
        &self.sender_id
    }

    /// Bearer token for the gateway
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("sender_id", &self.sender_id)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// A single message ready for the provider
///
/// Can only be built for a recipient that has a dialing address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryRequest {
    recipient: Recipient,
    dialing_address: String,
    channel: MessageChannel,
    body: String,
}

impl DeliveryRequest {
    pub fn new(
        recipient: Recipient,
        channel: MessageChannel,
        body: impl Into<String>,
    ) -> Result<Self, ResolutionError> {
        let dialing_address = recipient
            .dialing_address()
            .map(str::to_string)
            .ok_or(ResolutionError::MissingDialingAddress {
                user_id: recipient.user_id,
            })?;

        Ok(Self {
            recipient,
            dialing_address,
            channel,
            body: body.into(),
        })
    }

    pub fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    pub fn user_id(&self) -> UserId {
        self.recipient.user_id
    }

    pub fn dialing_address(&self) -> &str {
        &self.dialing_address
    }

    pub fn channel(&self) -> &MessageChannel {
        &self.channel
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Raw gateway reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body, unparsed
    pub body: String,
}

impl ProviderResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is 2xx. Informational only: delivery success does
    /// not depend on it.
    pub fn is_http_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Result of one delivery attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
}

impl DeliveryResult {
    /// The gateway answered
    pub fn delivered(response: impl Into<String>) -> Self {
        Self {
            success: true,
            provider_response: Some(response.into()),
            error_detail: None,
        }
    }

    /// The request never got an answer
    pub fn failed(detail: impl Into<String>) -> Self {
        Self {
            success: false,
            provider_response: None,
            error_detail: Some(detail.into()),
        }
    }

    /// Payload written to the delivery log: the provider body on success, the
    /// error detail on failure, each as a pretty-printed JSON string.
    pub fn log_payload(&self) -> String {
        let raw = if self.success {
            self.provider_response.as_deref().unwrap_or_default()
        } else {
            self.error_detail.as_deref().unwrap_or_default()
        };
        serde_json::to_string_pretty(raw).unwrap_or_else(|_| format!("{:?}", raw))
    }
}

/// Where a send call ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchStage {
    Idle,
    Resolving,
    Normalizing,
    Sending,
    Logged { success: bool },
    Aborted,
    Skipped,
}

impl DispatchStage {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Logged { .. } | Self::Aborted | Self::Skipped)
    }
}

/// Structured outcome of `send`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The gateway answered; logged as a success
    Delivered(DeliveryResult),
    /// Transport failure; logged as a failure
    Failed(DeliveryResult),
    /// Recipient could not be resolved; nothing sent, nothing logged
    Aborted(ResolutionError),
    /// Channel is not handled by this messenger; nothing done
    Skipped { channel: String },
}

impl DeliveryOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered(_))
    }

    pub fn result(&self) -> Option<&DeliveryResult> {
        match self {
            Self::Delivered(result) | Self::Failed(result) => Some(result),
            Self::Aborted(_) | Self::Skipped { .. } => None,
        }
    }

    pub fn terminal_stage(&self) -> DispatchStage {
        match self {
            Self::Delivered(_) => DispatchStage::Logged { success: true },
            Self::Failed(_) => DispatchStage::Logged { success: false },
            Self::Aborted(_) => DispatchStage::Aborted,
            Self::Skipped { .. } => DispatchStage::Skipped,
        }
    }

    /// Short status label
    pub fn status(&self) -> &'static str {
        match self {
            Self::Delivered(_) => "delivered",
            Self::Failed(_) => "failed",
            Self::Aborted(_) => "aborted",
            Self::Skipped { .. } => "skipped",
        }
    }
}
