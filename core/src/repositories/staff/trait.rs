//! Staff repository trait: read access to back-office accounts.

use async_trait::async_trait;

use crate::domain::entities::recipient::{StaffMember, UserId};
use crate::errors::DomainError;

/// Lookup of staff accounts by login user id
#[async_trait]
pub trait StaffRepository: Send + Sync {
    /// Find the staff account for a user id
    ///
    /// # Returns
    /// * `Ok(Some(StaffMember))` - User is a staff member
    /// * `Ok(None)` - No staff account for this user
    /// * `Err(DomainError)` - Storage failure
    async fn find_by_user_id(&self, user_id: UserId) -> Result<Option<StaffMember>, DomainError>;
}
