//! Domain entities for the dispatch pipeline.

pub mod delivery;
pub mod log_entry;
pub mod meta;
pub mod recipient;

#[cfg(test)]
mod tests;

pub use delivery::{
    DeliveryOutcome, DeliveryRequest, DeliveryResult, DispatchStage, MessageChannel,
    ProviderCredentials, ProviderResponse,
};
pub use log_entry::{LogCategory, LogEntry};
pub use meta::{MetaField, API_KEY_KEY, META_FIELDS, SENDER_ID_KEY};
pub use recipient::{
    AccountKind, Client, ContactNumber, ContactNumberType, NumberLocation, Recipient,
    StaffMember, UserId,
};
