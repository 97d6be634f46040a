//! Database module - MySQL implementations using SQLx
//!
//! This module provides database access layer implementations including:
//! - Connection pool management
//! - Repository implementations over the host platform's tables
//! - The delivery log table schema

pub mod connection;
pub mod mysql;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{
    MySqlClientRepository, MySqlContactRepository, MySqlDeliveryLogRepository,
    MySqlStaffRepository,
};
