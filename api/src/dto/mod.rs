//! Request and response bodies for the HTTP surface

pub mod error;
pub mod messages;
pub mod meta;

pub use error::{validation_error_response, ErrorResponse, ErrorResponseExt};
pub use messages::{HistoryQuery, SendMessageRequest, SendMessageResponse};
pub use meta::SetMetaResponse;
