//! # Webline Messenger Core
//!
//! Core dispatch logic for the Webline messenger.
//! This crate contains the domain entities, repository interfaces, services
//! and error types behind `send`: resolve the recipient, normalize the
//! address, deliver through the gateway and log the attempt.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::*;
pub use errors::{
    DomainError, DomainResult, ResolutionError, TransportError, TransportErrorKind,
};
pub use repositories::{
    ClientRepository, ContactRepository, DeliveryLogRepository, MockClientRepository,
    MockContactRepository, MockDeliveryLogRepository, MockStaffRepository,
    NoOpDeliveryLogRepository, StaffRepository,
};
pub use services::{
    set_meta, AddressNormalizer, DeliveryLogger, MessengerConfig, MessengerService,
    ProviderClient, RecipientResolver, DEFAULT_COUNTRY_CODE,
};
