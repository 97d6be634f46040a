//! Domain layer containing the dispatch pipeline's entities.

pub mod entities;

pub use entities::*;
