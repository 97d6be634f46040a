//! Messenger settings handler

use std::collections::BTreeMap;

use actix_web::{web, HttpResponse};
use wl_core::{set_meta, ProviderCredentials};
use wl_shared::types::response::ApiResponse;

use crate::dto::SetMetaResponse;

/// Handler for POST /api/v1/messenger/meta
///
/// Keeps the `sid` and `apikey` settings and drops everything else. Values are
/// never logged.
pub async fn update_meta(vars: web::Json<BTreeMap<String, String>>) -> HttpResponse {
    let submitted = vars.len();
    let fields = set_meta(vars.into_inner());
    let credentials_complete = ProviderCredentials::from_meta(&fields).is_ok();

    tracing::info!(
        submitted = submitted,
        kept = fields.len(),
        credentials_complete = credentials_complete,
        "Filtered messenger settings"
    );

    HttpResponse::Ok().json(ApiResponse::success(SetMetaResponse {
        fields,
        credentials_complete,
    }))
}
