//! Webline SMS Gateway Client
//!
//! Sends messages through the Webline bulk-SMS HTTP API:
//! `POST {endpoint}?recipient=..&sender_id=..&message=..` with a bearer token
//! and no request body.
//!
//! ## Behavior
//!
//! - Redirects (301, 302, 303, 307, 308) are followed as POST, at most 10
//!   hops; the bearer token is only sent to the endpoint's own origin
//! - HTTP/1.1 only, no response timeout
//! - Every response is returned to the caller whatever its status
//! - Connection failures may be retried with exponential backoff

use async_trait::async_trait;
use std::error::Error as StdError;
use std::time::Duration;
use reqwest::header::LOCATION;
use reqwest::{StatusCode, Url};
use tracing::{debug, info, warn};

use wl_core::{ProviderClient, ProviderCredentials, ProviderResponse, TransportError, TransportErrorKind};
use wl_shared::phone::mask_phone_number;

use crate::config::{SmsConfig, DEFAULT_WEBLINE_ENDPOINT};
use crate::InfrastructureError;

/// Maximum redirect hops
pub const MAX_REDIRECTS: usize = 10;

/// Webline client configuration
#[derive(Debug, Clone)]
pub struct WeblineConfig {
    /// Send endpoint URL
    pub endpoint: String,
    /// Extra attempts after a connection failure
    pub max_retries: u32,
    /// Initial retry delay in milliseconds
    pub retry_delay_ms: u64,
}

impl Default for WeblineConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_WEBLINE_ENDPOINT.to_string(),
            max_retries: 0,
            retry_delay_ms: 1000,
        }
    }
}

impl From<&SmsConfig> for WeblineConfig {
    fn from(config: &SmsConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            max_retries: config.max_retries,
            retry_delay_ms: config.retry_delay_ms,
        }
    }
}

/// Webline gateway client
#[derive(Debug, Clone)]
pub struct WeblineSmsClient {
    client: reqwest::Client,
    config: WeblineConfig,
}

impl WeblineSmsClient {
    /// Create a new Webline client
    pub fn new(config: WeblineConfig) -> Result<Self, InfrastructureError> {
        Url::parse(&config.endpoint).map_err(|e| {
            InfrastructureError::Config(format!("Invalid Webline endpoint {}: {}", config.endpoint, e))
        })?;

        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .http1_only()
            .build()?;

        info!(
            endpoint = %config.endpoint,
            max_retries = config.max_retries,
            "Webline SMS client initialized"
        );

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &WeblineConfig {
        &self.config
    }

    async fn send_once(
        &self,
        recipient: &str,
        credentials: &ProviderCredentials,
        message: &str,
    ) -> Result<ProviderResponse, TransportError> {
        let mut url = Url::parse_with_params(
            &self.config.endpoint,
            &[
                ("recipient", recipient),
                ("sender_id", credentials.sender_id()),
                ("message", message),
            ],
        )
        .map_err(|e| TransportError::new(TransportErrorKind::Request, e.to_string()))?;
        let origin = url.origin();
        let mut hops = 0;

        loop {
            let mut request = self.client.post(url.clone());
            if url.origin() == origin {
                request = request.bearer_auth(credentials.api_key());
            }
            let response = request.send().await.map_err(classify)?;
            let status = response.status();

            if let Some(next) = redirect_target(&response) {
                if hops == MAX_REDIRECTS {
                    return Err(TransportError::new(
                        TransportErrorKind::Redirect,
                        format!("too many redirects (more than {})", MAX_REDIRECTS),
                    ));
                }
                hops += 1;
                debug!(
                    hop = hops,
                    status = status.as_u16(),
                    same_origin = next.origin() == origin,
                    "Following Webline redirect"
                );
                url = next;
                continue;
            }

            let body = response.text().await.map_err(classify)?;
            return Ok(ProviderResponse::new(status.as_u16(), body));
        }
    }

    /// Send with retry on connection failures
    async fn send_with_retry(
        &self,
        recipient: &str,
        credentials: &ProviderCredentials,
        message: &str,
    ) -> Result<ProviderResponse, TransportError> {
        let mut attempts = 0;
        let mut delay = Duration::from_millis(self.config.retry_delay_ms);

        loop {
            attempts += 1;

            debug!(
                attempt = attempts,
                max_attempts = self.config.max_retries + 1,
                recipient = %mask_phone_number(recipient),
                "Sending SMS via Webline"
            );

            match self.send_once(recipient, credentials, message).await {
                Ok(response) => return Ok(response),
                Err(e) if e.is_retryable() && attempts <= self.config.max_retries => {
                    warn!(
                        attempt = attempts,
                        error = %e,
                        retry_in_ms = delay.as_millis() as u64,
                        "Webline connection failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[async_trait]
impl ProviderClient for WeblineSmsClient {
    async fn deliver(
        &self,
        recipient: &str,
        credentials: &ProviderCredentials,
        message: &str,
    ) -> Result<ProviderResponse, TransportError> {
        let response = self.send_with_retry(recipient, credentials, message).await?;

        if response.is_http_success() {
            info!(
                recipient = %mask_phone_number(recipient),
                status = response.status,
                "SMS accepted by Webline"
            );
        } else {
            warn!(
                recipient = %mask_phone_number(recipient),
                status = response.status,
                "Webline answered with a non-success status"
            );
        }

        Ok(response)
    }

    fn provider_name(&self) -> &str {
        "webline"
    }
}

/// Next hop of a redirect response, resolved against the current URL
fn redirect_target(response: &reqwest::Response) -> Option<Url> {
    match response.status() {
        StatusCode::MOVED_PERMANENTLY
        | StatusCode::FOUND
        | StatusCode::SEE_OTHER
        | StatusCode::TEMPORARY_REDIRECT
        | StatusCode::PERMANENT_REDIRECT => {}
        _ => return None,
    }
    let location = response.headers().get(LOCATION)?.to_str().ok()?;
    response.url().join(location).ok()
}

/// Map a reqwest failure to a transport error
pub(crate) fn classify(error: reqwest::Error) -> TransportError {
    let kind = if error.is_timeout() {
        TransportErrorKind::Timeout
    } else if error.is_connect() {
        TransportErrorKind::Connect
    } else if error.is_redirect() {
        TransportErrorKind::Redirect
    } else if error.is_request() || error.is_builder() || error.is_body() {
        TransportErrorKind::Request
    } else {
        TransportErrorKind::Other
    };

    TransportError::new(kind, error_chain(&error))
}

/// Render an error with its sources, outermost first
fn error_chain(error: &dyn StdError) -> String {
    let mut detail = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !detail.contains(&text) {
            detail.push_str(": ");
            detail.push_str(&text);
        }
        source = cause.source();
    }
    detail
}
