//! Message dispatch and delivery history handlers

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use wl_core::{
    ClientRepository, ContactRepository, DeliveryLogRepository, DeliveryOutcome, MessageChannel,
    ProviderClient, ResolutionError, StaffRepository, UserId,
};
use wl_shared::types::response::ApiResponse;

use crate::dto::{
    validation_error_response, ErrorResponse, ErrorResponseExt, HistoryQuery,
    SendMessageRequest, SendMessageResponse,
};
use crate::routes::AppState;

/// Handler for POST /api/v1/messages
///
/// Runs one send through the messenger.
///
/// # Request Body
///
/// ```json
/// {
///     "user_id": 7,
///     "content": "Your invoice #1042 is due",
///     "type": "sms"
/// }
/// ```
///
/// # Response
///
/// `200 OK` for delivered, failed and skipped sends. An aborted send answers
/// `404` for an unknown user, `422` when no number is on file and `503` when
/// the account lookup failed. The body always carries the outcome.
pub async fn send_message<S, C, K, P, L>(
    state: web::Data<AppState<S, C, K, P, L>>,
    request: web::Json<SendMessageRequest>,
) -> HttpResponse
where
    S: StaffRepository + 'static,
    C: ClientRepository + 'static,
    K: ContactRepository + 'static,
    P: ProviderClient + 'static,
    L: DeliveryLogRepository + 'static,
{
    let request_id = Uuid::new_v4().to_string();

    if let Err(errors) = request.validate() {
        tracing::warn!(request_id = %request_id, errors = %errors, "Rejected send request");
        return validation_error_response(&errors);
    }

    let request = request.into_inner();
    let channel = MessageChannel::parse(&request.message_type);

    tracing::info!(
        request_id = %request_id,
        user_id = request.user_id,
        channel = %channel,
        "Processing send request"
    );

    let outcome = state
        .messenger
        .send(UserId::new(request.user_id), &request.content, channel)
        .await;

    let body = SendMessageResponse::from(&outcome);
    let response = match &outcome {
        DeliveryOutcome::Delivered(_) | DeliveryOutcome::Skipped { .. } => ApiResponse::success(body),
        DeliveryOutcome::Failed(result) => ApiResponse::failure(
            body,
            result.error_detail.clone().unwrap_or_default(),
        ),
        DeliveryOutcome::Aborted(error) => ApiResponse::failure(body, error.to_string()),
    };

    HttpResponse::build(status_for(&outcome)).json(response.with_request_id(request_id))
}

/// Handler for GET /api/v1/messages/{user_id}
///
/// Most recent logged attempts for a user, newest first. `limit` defaults to
/// 20 and is capped at 100.
pub async fn message_history<S, C, K, P, L>(
    state: web::Data<AppState<S, C, K, P, L>>,
    user_id: web::Path<u64>,
    query: web::Query<HistoryQuery>,
) -> HttpResponse
where
    S: StaffRepository + 'static,
    C: ClientRepository + 'static,
    K: ContactRepository + 'static,
    P: ProviderClient + 'static,
    L: DeliveryLogRepository + 'static,
{
    if let Err(errors) = query.validate() {
        return validation_error_response(&errors);
    }

    let user_id = UserId::new(user_id.into_inner());
    match state.messenger.recent_deliveries(user_id, query.limit()).await {
        Ok(entries) => HttpResponse::Ok().json(ApiResponse::success(entries)),
        Err(e) => {
            tracing::error!(user_id = %user_id, error = %e, "Failed to read delivery history");
            ErrorResponse::new("log_unavailable", "Delivery history is unavailable")
                .to_response(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

fn status_for(outcome: &DeliveryOutcome) -> StatusCode {
    match outcome {
        DeliveryOutcome::Aborted(ResolutionError::UserNotFound { .. }) => StatusCode::NOT_FOUND,
        DeliveryOutcome::Aborted(ResolutionError::MissingDialingAddress { .. }) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        DeliveryOutcome::Aborted(ResolutionError::Backend { .. }) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::OK,
    }
}
