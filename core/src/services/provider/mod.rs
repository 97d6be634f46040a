//! Outbound SMS gateway seam.

mod traits;

pub use traits::ProviderClient;
