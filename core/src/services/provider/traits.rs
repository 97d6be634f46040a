//! Trait for SMS gateway integration

use async_trait::async_trait;

use crate::domain::entities::delivery::{ProviderCredentials, ProviderResponse};
use crate::errors::TransportError;

/// HTTP delivery against an SMS gateway
///
/// Any response the gateway sends back is `Ok`, whatever its status. Only
/// failures to obtain a response are errors.
#[async_trait]
pub trait ProviderClient: Send + Sync {
    /// Send one message to an already normalized address
    async fn deliver(
        &self,
        recipient: &str,
        credentials: &ProviderCredentials,
        message: &str,
    ) -> Result<ProviderResponse, TransportError>;

    /// Gateway name for logs
    fn provider_name(&self) -> &str;
}

#[async_trait]
impl<T> ProviderClient for Box<T>
where
    T: ProviderClient + ?Sized,
{
    async fn deliver(
        &self,
        recipient: &str,
        credentials: &ProviderCredentials,
        message: &str,
    ) -> Result<ProviderResponse, TransportError> {
        (**self).deliver(recipient, credentials, message).await
    }

    fn provider_name(&self) -> &str {
        (**self).provider_name()
    }
}
