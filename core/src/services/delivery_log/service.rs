//! Delivery logger backed by a [`DeliveryLogRepository`].
//!
//! Sink failures are reported through tracing and never returned.

use std::sync::Arc;

use crate::domain::entities::log_entry::{LogCategory, LogEntry};
use crate::domain::entities::recipient::UserId;
use crate::errors::DomainResult;
use crate::repositories::DeliveryLogRepository;

/// Records delivery attempts
pub struct DeliveryLogger<R>
where
    R: DeliveryLogRepository,
{
    repository: Arc<R>,
}

impl<R> DeliveryLogger<R>
where
    R: DeliveryLogRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Append one attempt to the log
    ///
    /// # Arguments
    /// * `user_id` - Recipient user
    /// * `payload` - Serialized result, see `DeliveryResult::log_payload`
    /// * `category` - Message direction
    /// * `success` - Whether the attempt counts as delivered
    pub async fn record(
        &self,
        user_id: UserId,
        payload: impl Into<String>,
        category: LogCategory,
        success: bool,
    ) {
        let entry = LogEntry::new(user_id, category, payload, success);

        match self.repository.append(&entry).await {
            Ok(()) => tracing::debug!(
                user_id = %user_id,
                log_id = %entry.id,
                success = success,
                event = "delivery_logged",
                "Recorded delivery attempt"
            ),
            Err(e) => tracing::error!(
                user_id = %user_id,
                log_id = %entry.id,
                success = success,
                error = %e,
                event = "delivery_log_failed",
                "Failed to record delivery attempt"
            ),
        }
    }

    /// Most recent entries for a user, newest first
    pub async fn recent(&self, user_id: UserId, limit: usize) -> DomainResult<Vec<LogEntry>> {
        self.repository.find_by_user(user_id, limit).await
    }
}
