//! Application factory
//!
//! Builds the Actix-web application around a shared `AppState`.

use actix_web::{
    error::InternalError, http::StatusCode, middleware::Logger, web, App, HttpResponse,
};
use chrono::Utc;

use wl_core::{
    ClientRepository, ContactRepository, DeliveryLogRepository, ProviderClient, StaffRepository,
};
use wl_shared::types::response::{ErrorResponse, HealthResponse, HealthStatus};

use crate::dto::ErrorResponseExt;
use crate::routes::messages::{message_history, send_message};
use crate::routes::meta::update_meta;
use crate::routes::AppState;

/// Create and configure the application with all dependencies
pub fn create_app<S, C, K, P, L>(
    app_state: web::Data<AppState<S, C, K, P, L>>,
    max_payload_size: usize,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    S: StaffRepository + 'static,
    C: ClientRepository + 'static,
    K: ContactRepository + 'static,
    P: ProviderClient + 'static,
    L: DeliveryLogRepository + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(json_config(max_payload_size))
        .wrap(Logger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/messages")
                        .route("", web::post().to(send_message::<S, C, K, P, L>))
                        .route("/{user_id}", web::get().to(message_history::<S, C, K, P, L>)),
                )
                .route("/messenger/meta", web::post().to(update_meta))
                .route("/", web::get().to(api_documentation)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Malformed or oversized JSON bodies answer 400 with an `ErrorResponse`
fn json_config(max_payload_size: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(max_payload_size)
        .error_handler(|err, _req| {
            let response = ErrorResponse::new("invalid_request", err.to_string())
                .to_response(StatusCode::BAD_REQUEST);
            InternalError::from_response(err, response).into()
        })
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: HealthStatus::Healthy,
        service: "webline-messenger".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}

/// API documentation endpoint
async fn api_documentation() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Webline Messenger API v1",
        "endpoints": {
            "health": "/health",
            "send": {
                "path": "/api/v1/messages",
                "method": "POST",
                "request_body": {
                    "user_id": "integer (>= 1)",
                    "content": "string",
                    "type": "string ('sms' is dispatched, anything else is skipped)"
                },
                "responses": {
                    "200": "Delivered, failed or skipped; see data.status",
                    "400": "Invalid request data",
                    "404": "Unknown user",
                    "422": "No dialing address on file",
                    "503": "Account lookup unavailable"
                }
            },
            "history": {
                "path": "/api/v1/messages/{user_id}?limit=20",
                "method": "GET"
            },
            "meta": {
                "path": "/api/v1/messenger/meta",
                "method": "POST",
                "request_body": "object of setting name to value; only sid and apikey are kept"
            }
        }
    }))
}

async fn not_found() -> HttpResponse {
    ErrorResponse::new("not_found", "The requested resource was not found")
        .to_response(StatusCode::NOT_FOUND)
}
