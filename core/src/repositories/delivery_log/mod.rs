//! Delivery log repository module.

mod r#trait;
pub use r#trait::DeliveryLogRepository;

mod noop;
pub use noop::NoOpDeliveryLogRepository;

mod mock;
pub use mock::MockDeliveryLogRepository;
