//! Client directory repository module.

mod r#trait;
pub use r#trait::ClientRepository;

mod mock;
pub use mock::MockClientRepository;
