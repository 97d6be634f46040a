//! Shared utilities and common types for the Webline messenger
//!
//! This crate provides common functionality used across all workspace crates:
//! - Configuration types (environment, logging, database, HTTP server)
//! - Phone number helpers used by the dispatch pipeline and by logging
//! - API response wrappers

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, DatabaseConfig, Environment, LogFormat, LoggingConfig, ServerConfig,
};
pub use types::{ApiResponse, ErrorResponse, HealthStatus};
pub use utils::phone;
