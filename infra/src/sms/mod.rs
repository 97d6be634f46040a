//! SMS Gateway Module
//!
//! This module provides the gateway clients behind the core's
//! `ProviderClient` interface.
//!
//! ## Features
//!
//! - **Webline**: production delivery through the Webline bulk-SMS HTTP API
//! - **Mock Implementation**: logs messages instead of sending them
//! - **Security**: phone numbers are masked and API keys never logged

pub mod mock_sms;
pub mod webline;

pub use mock_sms::MockSmsClient;
pub use webline::{WeblineConfig, WeblineSmsClient};

use wl_core::ProviderClient;

use crate::config::SmsConfig;
use crate::InfrastructureError;

#[cfg(test)]
mod tests;

/// Create a gateway client based on configuration
///
/// # Arguments
///
/// * `config` - SMS configuration; `provider` selects "webline" or "mock"
///
/// # Returns
///
/// A boxed gateway client, or a configuration error for an unknown provider
pub fn create_provider_client(
    config: &SmsConfig,
) -> Result<Box<dyn ProviderClient>, InfrastructureError> {
    match config.provider.as_str() {
        "mock" => {
            tracing::info!(provider = "mock", "Using mock SMS gateway");
            Ok(Box::new(MockSmsClient::new()))
        }
        "webline" => {
            let client = WeblineSmsClient::new(WeblineConfig::from(config))?;
            Ok(Box::new(client))
        }
        other => Err(InfrastructureError::Config(format!(
            "Unknown SMS provider: {}",
            other
        ))),
    }
}
