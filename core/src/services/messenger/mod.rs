//! Messenger orchestration: resolve, normalize, deliver, log.
//!
//! This module wires the recipient resolver, the address normalizer, an SMS
//! gateway client and the delivery logger into a single `send` operation, and
//! hosts the meta-field handling used to configure gateway credentials.

mod config;
mod meta;
mod service;

#[cfg(test)]
mod tests;

pub use config::MessengerConfig;
pub use meta::set_meta;
pub use service::MessengerService;
