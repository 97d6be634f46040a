//! Contact repository trait: phone numbers attached to a client's contact.

use async_trait::async_trait;

use crate::domain::entities::recipient::ContactNumber;
use crate::errors::DomainError;

#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// All numbers for a contact, in the store's own order
    ///
    /// An unknown contact yields an empty list, not an error.
    async fn get_numbers(&self, contact_id: u64) -> Result<Vec<ContactNumber>, DomainError>;
}
