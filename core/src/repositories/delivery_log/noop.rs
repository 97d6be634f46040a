//! No-op implementation of DeliveryLogRepository for when logging is disabled

use async_trait::async_trait;

use crate::domain::entities::log_entry::LogEntry;
use crate::domain::entities::recipient::UserId;
use crate::errors::DomainError;

use super::DeliveryLogRepository;

/// Discards every entry
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpDeliveryLogRepository;

impl NoOpDeliveryLogRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DeliveryLogRepository for NoOpDeliveryLogRepository {
    async fn append(&self, _entry: &LogEntry) -> Result<(), DomainError> {
        Ok(())
    }

    async fn find_by_user(&self, _user_id: UserId, _limit: usize) -> Result<Vec<LogEntry>, DomainError> {
        Ok(Vec::new())
    }
}
