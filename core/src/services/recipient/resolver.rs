//! Two-step account lookup: staff directory first, then clients and their
//! contact numbers.

use std::sync::Arc;

use crate::domain::entities::recipient::{Recipient, UserId};
use crate::errors::{DomainError, ResolutionError};
use crate::repositories::{ClientRepository, ContactRepository, StaffRepository};

/// Resolves a user id to a [`Recipient`]
pub struct RecipientResolver<S, C, K>
where
    S: StaffRepository,
    C: ClientRepository,
    K: ContactRepository,
{
    staff: Arc<S>,
    clients: Arc<C>,
    contacts: Arc<K>,
}

impl<S, C, K> RecipientResolver<S, C, K>
where
    S: StaffRepository,
    C: ClientRepository,
    K: ContactRepository,
{
    pub fn new(staff: Arc<S>, clients: Arc<C>, contacts: Arc<K>) -> Self {
        Self {
            staff,
            clients,
            contacts,
        }
    }

    /// Resolve a user id
    ///
    /// Staff accounts are addressed through their mobile field and the contact
    /// store is not consulted for them. Clients are addressed through the
    /// first number on their contact, in store order.
    ///
    /// # Returns
    /// * `Ok(Recipient)` - The account exists; the address may still be `None`
    /// * `Err(ResolutionError::UserNotFound)` - Neither a staff member nor a client
    /// * `Err(ResolutionError::Backend)` - A lookup failed
    pub async fn resolve(&self, user_id: UserId) -> Result<Recipient, ResolutionError> {
        if let Some(member) = self
            .staff
            .find_by_user_id(user_id)
            .await
            .map_err(backend("staff"))?
        {
            tracing::debug!(user_id = %user_id, kind = "staff", "Resolved recipient");
            return Ok(Recipient::staff(&member));
        }

        let client = self
            .clients
            .find_by_user_id(user_id)
            .await
            .map_err(backend("client"))?
            .ok_or(ResolutionError::UserNotFound { user_id })?;

        let numbers = self
            .contacts
            .get_numbers(client.contact_id)
            .await
            .map_err(backend("contact"))?;

        tracing::debug!(
            user_id = %user_id,
            kind = "client",
            contact_id = client.contact_id,
            numbers = numbers.len(),
            "Resolved recipient"
        );
        Ok(Recipient::client(&client, numbers.first()))
    }
}

fn backend(source: &'static str) -> impl Fn(DomainError) -> ResolutionError {
    move |error| ResolutionError::Backend {
        message: format!("{} lookup: {}", source, error),
    }
}
