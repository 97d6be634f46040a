//! Mock implementation of DeliveryLogRepository for testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::domain::entities::log_entry::LogEntry;
use crate::domain::entities::recipient::UserId;
use crate::errors::DomainError;

use super::DeliveryLogRepository;

/// In-memory log sink; writers are serialized through the mutex
#[derive(Default)]
pub struct MockDeliveryLogRepository {
    entries: Mutex<Vec<LogEntry>>,
    should_fail: AtomicBool,
}

impl MockDeliveryLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether appends should fail
    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// All stored entries in append order
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

#[async_trait]
impl DeliveryLogRepository for MockDeliveryLogRepository {
    async fn append(&self, entry: &LogEntry) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::Internal {
                message: "Mock delivery log repository error".to_string(),
            });
        }

        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry.clone());
        Ok(())
    }

    async fn find_by_user(&self, user_id: UserId, limit: usize) -> Result<Vec<LogEntry>, DomainError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let mut found: Vec<LogEntry> = entries
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        found.truncate(limit);
        Ok(found)
    }
}
