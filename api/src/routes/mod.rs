//! Route handlers
//!
//! - `messages`: send a message and read a user's delivery history
//! - `meta`: filter submitted messenger settings

pub mod messages;
pub mod meta;

use std::sync::Arc;

use wl_core::{
    ClientRepository, ContactRepository, DeliveryLogRepository, MessengerService,
    ProviderClient, StaffRepository,
};

/// Application state that holds shared services
pub struct AppState<S, C, K, P, L>
where
    S: StaffRepository,
    C: ClientRepository,
    K: ContactRepository,
    P: ProviderClient,
    L: DeliveryLogRepository,
{
    pub messenger: Arc<MessengerService<S, C, K, P, L>>,
}

impl<S, C, K, P, L> AppState<S, C, K, P, L>
where
    S: StaffRepository,
    C: ClientRepository,
    K: ContactRepository,
    P: ProviderClient,
    L: DeliveryLogRepository,
{
    pub fn new(messenger: MessengerService<S, C, K, P, L>) -> Self {
        Self {
            messenger: Arc::new(messenger),
        }
    }
}
