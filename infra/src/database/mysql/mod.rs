//! MySQL repository implementations.
//!
//! The staff, client and contact tables belong to the host billing platform
//! and are only read. The delivery log table is owned by the messenger.

pub mod client_repository_impl;
pub mod contact_repository_impl;
pub mod delivery_log_repository_impl;
pub mod staff_repository_impl;

pub use client_repository_impl::MySqlClientRepository;
pub use contact_repository_impl::MySqlContactRepository;
pub use delivery_log_repository_impl::MySqlDeliveryLogRepository;
pub use staff_repository_impl::MySqlStaffRepository;

use sqlx::mysql::MySqlRow;
use sqlx::{Decode, MySql, Row, Type};
use wl_core::errors::DomainError;

/// Read a column, mapping failures to `DomainError::Internal`
pub(crate) fn column<'r, T>(row: &'r MySqlRow, name: &str) -> Result<T, DomainError>
where
    T: Decode<'r, MySql> + Type<MySql>,
{
    row.try_get(name).map_err(|e| DomainError::Internal {
        message: format!("Failed to get {}: {}", name, e),
    })
}

/// Map a query failure to `DomainError::Internal`
pub(crate) fn query_error(context: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| {
        tracing::error!(error = %e, query = context, "Database query failed");
        DomainError::Internal {
            message: format!("Failed to {}: {}", context, e),
        }
    }
}
