//! Delivery logging: records each attempt without affecting the pipeline.

mod service;

pub use service::DeliveryLogger;
