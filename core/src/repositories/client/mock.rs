//! In-memory ClientRepository for tests and local development

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::domain::entities::recipient::{Client, UserId};
use crate::errors::DomainError;

use super::ClientRepository;

/// Mock client directory with lookup counting and failure injection
#[derive(Default)]
pub struct MockClientRepository {
    clients: Mutex<HashMap<UserId, Client>>,
    lookups: AtomicUsize,
    should_fail: AtomicBool,
}

impl MockClientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory pre-filled with clients
    pub fn with_clients(clients: impl IntoIterator<Item = Client>) -> Self {
        let repo = Self::new();
        for client in clients {
            repo.insert(client);
        }
        repo
    }

    pub fn insert(&self, client: Client) {
        self.clients
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(client.user_id, client);
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl ClientRepository for MockClientRepository {
    async fn find_by_user_id(&self, user_id: UserId) -> Result<Option<Client>, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::Internal {
                message: "Mock client repository error".to_string(),
            });
        }

        let clients = self.clients.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(clients.get(&user_id).cloned())
    }
}
