//! Configuration management for infrastructure services
//!
//! Handles the database connection settings and the SMS gateway credentials,
//! both read from the environment.

use serde::{Deserialize, Serialize};
use wl_core::ProviderCredentials;
use wl_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// Default Webline send endpoint
pub const DEFAULT_WEBLINE_ENDPOINT: &str = "https://bulksms.webline.co.tz/api/v3/sms/send";

/// Infrastructure configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfrastructureConfig {
    pub database: DatabaseConfig,
    pub sms: SmsConfig,
}

impl InfrastructureConfig {
    /// Load configuration from environment, reading `.env` when present
    pub fn from_env() -> Result<Self, InfrastructureError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database: DatabaseConfig::from_env(),
            sms: SmsConfig::from_env()?,
        })
    }
}

/// SMS gateway configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct SmsConfig {
    /// Gateway implementation ("webline" or "mock")
    pub provider: String,
    /// Sender id registered with the gateway
    pub sender_id: String,
    /// Bearer token for the gateway
    pub api_key: String,
    /// Send endpoint URL
    pub endpoint: String,
    /// Extra attempts after a connection failure
    pub max_retries: u32,
    /// Delay before the first retry, doubled on each further retry
    pub retry_delay_ms: u64,
    /// Country calling code for local numbers
    pub country_code: String,
}

impl std::fmt::Debug for SmsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmsConfig")
            .field("provider", &self.provider)
            .field("sender_id", &self.sender_id)
            .field("api_key", &"[REDACTED]")
            .field("endpoint", &self.endpoint)
            .field("max_retries", &self.max_retries)
            .field("retry_delay_ms", &self.retry_delay_ms)
            .field("country_code", &self.country_code)
            .finish()
    }
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            provider: "mock".to_string(),
            sender_id: String::new(),
            api_key: String::new(),
            endpoint: DEFAULT_WEBLINE_ENDPOINT.to_string(),
            max_retries: 0,
            retry_delay_ms: 1000,
            country_code: wl_core::DEFAULT_COUNTRY_CODE.to_string(),
        }
    }
}

impl SmsConfig {
    /// Create configuration from environment variables
    ///
    /// The `webline` provider requires `WEBLINE_SENDER_ID` and `WEBLINE_API_KEY`.
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let defaults = Self::default();
        let provider = std::env::var("SMS_PROVIDER").unwrap_or(defaults.provider);

        let sender_id = std::env::var("WEBLINE_SENDER_ID").unwrap_or_default();
        let api_key = std::env::var("WEBLINE_API_KEY").unwrap_or_default();

        if provider == "webline" {
            if sender_id.trim().is_empty() {
                return Err(InfrastructureError::Config("WEBLINE_SENDER_ID not set".to_string()));
            }
            if api_key.trim().is_empty() {
                return Err(InfrastructureError::Config("WEBLINE_API_KEY not set".to_string()));
            }
        }

        Ok(Self {
            provider,
            sender_id,
            api_key,
            endpoint: std::env::var("WEBLINE_ENDPOINT").unwrap_or(defaults.endpoint),
            max_retries: std::env::var("WEBLINE_MAX_RETRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_retries),
            retry_delay_ms: std::env::var("WEBLINE_RETRY_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.retry_delay_ms),
            country_code: std::env::var("WEBLINE_COUNTRY_CODE").unwrap_or(defaults.country_code),
        })
    }

    /// Gateway credentials for the messenger
    pub fn credentials(&self) -> ProviderCredentials {
        ProviderCredentials::new(&self.sender_id, &self.api_key)
    }
}
