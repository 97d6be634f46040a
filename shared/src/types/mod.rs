//! API response wrappers shared by the HTTP surface

pub mod response;

pub use response::{ApiResponse, ErrorResponse, HealthResponse, HealthStatus};
