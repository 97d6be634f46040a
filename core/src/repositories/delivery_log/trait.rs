//! Delivery log repository trait defining the interface for attempt persistence.

use async_trait::async_trait;

use crate::domain::entities::log_entry::LogEntry;
use crate::domain::entities::recipient::UserId;
use crate::errors::DomainError;

/// Append-only sink for delivery attempts
///
/// Entries are never updated or deleted through this interface.
#[async_trait]
pub trait DeliveryLogRepository: Send + Sync {
    /// Append a log entry
    ///
    /// # Arguments
    /// * `entry` - The attempt to persist
    ///
    /// # Returns
    /// * `Ok(())` on successful write
    /// * `Err(DomainError)` if the sink is unavailable
    async fn append(&self, entry: &LogEntry) -> Result<(), DomainError>;

    /// Find the most recent entries for a user
    ///
    /// # Arguments
    /// * `user_id` - The user the messages were sent to
    /// * `limit` - Maximum number of records to return
    ///
    /// # Returns
    /// * Entries ordered by `created_at` descending
    async fn find_by_user(&self, user_id: UserId, limit: usize) -> Result<Vec<LogEntry>, DomainError>;
}
