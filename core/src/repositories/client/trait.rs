//! Client repository trait: read access to customer accounts.

use async_trait::async_trait;

use crate::domain::entities::recipient::{Client, UserId};
use crate::errors::DomainError;

/// Lookup of client accounts by login user id
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Find the client account for a user id
    ///
    /// # Returns
    /// * `Ok(Some(Client))` - User is a client
    /// * `Ok(None)` - No client account for this user
    /// * `Err(DomainError)` - Storage failure
    async fn find_by_user_id(&self, user_id: UserId) -> Result<Option<Client>, DomainError>;
}
