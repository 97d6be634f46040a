use std::collections::HashMap;

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use validator::ValidationErrors;
pub use wl_shared::types::response::ErrorResponse;

// Extension trait for ErrorResponse to add actix-web specific methods
pub trait ErrorResponseExt {
    fn to_response(&self, status: StatusCode) -> HttpResponse;
}

impl ErrorResponseExt for ErrorResponse {
    fn to_response(&self, status: StatusCode) -> HttpResponse {
        HttpResponse::build(status).json(self)
    }
}

/// 400 response listing the failed fields
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let mut details = HashMap::new();
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        details.insert(field.to_string(), serde_json::json!(messages));
    }

    ErrorResponse::new("validation_error", "Invalid request data")
        .with_details(details)
        .to_response(StatusCode::BAD_REQUEST)
}
