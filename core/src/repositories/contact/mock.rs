//! In-memory ContactRepository for tests and local development

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::domain::entities::recipient::ContactNumber;
use crate::errors::DomainError;

use super::ContactRepository;

/// Mock contact store; numbers keep insertion order per contact
#[derive(Default)]
pub struct MockContactRepository {
    numbers: Mutex<HashMap<u64, Vec<ContactNumber>>>,
    lookups: AtomicUsize,
    should_fail: AtomicBool,
}

impl MockContactRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a number to its contact
    pub fn add_number(&self, number: ContactNumber) {
        self.numbers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(number.contact_id)
            .or_default()
            .push(number);
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn get_numbers(&self, contact_id: u64) -> Result<Vec<ContactNumber>, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::Internal {
                message: "Mock contact repository error".to_string(),
            });
        }

        let numbers = self.numbers.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(numbers.get(&contact_id).cloned().unwrap_or_default())
    }
}
