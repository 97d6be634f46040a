//! Business services containing the dispatch pipeline.

pub mod delivery_log;
pub mod messenger;
pub mod normalizer;
pub mod provider;
pub mod recipient;

// Re-export commonly used types
pub use delivery_log::DeliveryLogger;
pub use messenger::{set_meta, MessengerConfig, MessengerService};
pub use normalizer::{AddressNormalizer, DEFAULT_COUNTRY_CODE};
pub use provider::ProviderClient;
pub use recipient::RecipientResolver;
