//! Contact number repository module.

mod r#trait;
pub use r#trait::ContactRepository;

mod mock;
pub use mock::MockContactRepository;
