//! Messenger service: the dispatch pipeline behind `send`.

use std::sync::Arc;

use tracing::Instrument;
use wl_shared::phone::mask_phone_number;

use crate::domain::entities::delivery::{
    DeliveryOutcome, DeliveryRequest, DeliveryResult, DispatchStage, MessageChannel,
    ProviderCredentials,
};
use crate::domain::entities::log_entry::{LogCategory, LogEntry};
use crate::domain::entities::recipient::UserId;
use crate::errors::DomainResult;
use crate::repositories::{
    ClientRepository, ContactRepository, DeliveryLogRepository, StaffRepository,
};
use crate::services::delivery_log::DeliveryLogger;
use crate::services::normalizer::AddressNormalizer;
use crate::services::provider::ProviderClient;
use crate::services::recipient::RecipientResolver;

use super::config::MessengerConfig;

/// Sends messages to platform users over SMS
///
/// One `send` call runs the pipeline sequentially and shares no mutable
/// state with other calls. Dropping the returned future cancels any
/// in-flight gateway request.
pub struct MessengerService<S, C, K, P, L>
where
    S: StaffRepository,
    C: ClientRepository,
    K: ContactRepository,
    P: ProviderClient,
    L: DeliveryLogRepository,
{
    resolver: RecipientResolver<S, C, K>,
    normalizer: AddressNormalizer,
    provider: Arc<P>,
    logger: DeliveryLogger<L>,
    credentials: ProviderCredentials,
}

impl<S, C, K, P, L> MessengerService<S, C, K, P, L>
where
    S: StaffRepository,
    C: ClientRepository,
    K: ContactRepository,
    P: ProviderClient,
    L: DeliveryLogRepository,
{
    pub fn new(
        resolver: RecipientResolver<S, C, K>,
        provider: Arc<P>,
        logger: DeliveryLogger<L>,
        credentials: ProviderCredentials,
        config: MessengerConfig,
    ) -> Self {
        Self {
            resolver,
            normalizer: AddressNormalizer::new(config.country_code),
            provider,
            logger,
            credentials,
        }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }

    /// Send a message to a user
    ///
    /// # Arguments
    /// * `user_id` - Staff or client user id
    /// * `content` - Message body
    /// * `channel` - Only SMS is handled; anything else is skipped
    ///
    /// # Returns
    /// * `Delivered` - The gateway answered, whatever its status
    /// * `Failed` - No answer from the gateway; the attempt is logged
    /// * `Aborted` - The recipient could not be addressed; nothing is logged
    /// * `Skipped` - Not an SMS
    pub async fn send(
        &self,
        user_id: UserId,
        content: &str,
        channel: MessageChannel,
    ) -> DeliveryOutcome {
        let span = tracing::info_span!(
            "messenger_send",
            user_id = %user_id,
            channel = %channel,
            provider = self.provider.provider_name(),
        );
        self.dispatch(user_id, content, channel).instrument(span).await
    }

    /// Most recent logged attempts for a user
    pub async fn recent_deliveries(&self, user_id: UserId, limit: usize) -> DomainResult<Vec<LogEntry>> {
        self.logger.recent(user_id, limit).await
    }

    async fn dispatch(
        &self,
        user_id: UserId,
        content: &str,
        channel: MessageChannel,
    ) -> DeliveryOutcome {
        tracing::trace!(stage = ?DispatchStage::Idle, length = content.chars().count());
        if !channel.is_sms() {
            tracing::debug!(stage = ?DispatchStage::Skipped, "Channel not handled by this messenger");
            return DeliveryOutcome::Skipped {
                channel: channel.as_str().to_string(),
            };
        }

        tracing::trace!(stage = ?DispatchStage::Resolving);
        let recipient = match self.resolver.resolve(user_id).await {
            Ok(recipient) => recipient,
            Err(e) => {
                tracing::warn!(
                    stage = ?DispatchStage::Aborted,
                    reason = e.code(),
                    error = %e,
                    event = "recipient_unresolved",
                    "Message not sent"
                );
                return DeliveryOutcome::Aborted(e);
            }
        };

        tracing::trace!(stage = ?DispatchStage::Normalizing, kind = recipient.kind.as_str());
        let normalized = recipient
            .dialing_address()
            .map(|raw| self.normalizer.normalize(raw));
        let request = match DeliveryRequest::new(
            recipient.with_dialing_address(normalized),
            channel,
            content,
        ) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(
                    stage = ?DispatchStage::Aborted,
                    reason = e.code(),
                    event = "recipient_unresolved",
                    "Message not sent"
                );
                return DeliveryOutcome::Aborted(e);
            }
        };

        tracing::debug!(
            stage = ?DispatchStage::Sending,
            recipient = %mask_phone_number(request.dialing_address()),
            "Sending message"
        );
        match self
            .provider
            .deliver(request.dialing_address(), &self.credentials, request.body())
            .await
        {
            Ok(response) => {
                if !response.is_http_success() {
                    tracing::warn!(
                        status = response.status,
                        recipient = %mask_phone_number(request.dialing_address()),
                        event = "gateway_non_success_status",
                        "Gateway answered with a non-success status; recorded as delivered"
                    );
                }
                let result = DeliveryResult::delivered(response.body);
                self.logger
                    .record(user_id, result.log_payload(), LogCategory::Output, true)
                    .await;

                tracing::info!(
                    stage = ?DispatchStage::Logged { success: true },
                    status = response.status,
                    event = "message_delivered",
                    "Message handed to gateway"
                );
                DeliveryOutcome::Delivered(result)
            }
            Err(e) => {
                let result = DeliveryResult::failed(format!("Request Error: {}", e.detail));
                self.logger
                    .record(user_id, result.log_payload(), LogCategory::Output, false)
                    .await;

                tracing::error!(
                    stage = ?DispatchStage::Logged { success: false },
                    kind = %e.kind,
                    error = %e,
                    recipient = %mask_phone_number(request.dialing_address()),
                    event = "message_delivery_failed",
                    "Gateway request failed"
                );
                DeliveryOutcome::Failed(result)
            }
        }
    }
}
