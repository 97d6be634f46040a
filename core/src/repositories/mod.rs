pub mod client;
pub mod contact;
pub mod delivery_log;
pub mod staff;

pub use client::{ClientRepository, MockClientRepository};
pub use contact::{ContactRepository, MockContactRepository};
pub use delivery_log::{DeliveryLogRepository, MockDeliveryLogRepository, NoOpDeliveryLogRepository};
pub use staff::{MockStaffRepository, StaffRepository};
