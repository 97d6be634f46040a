//! Staff directory repository module.

mod r#trait;
pub use r#trait::StaffRepository;

mod mock;
pub use mock::MockStaffRepository;
