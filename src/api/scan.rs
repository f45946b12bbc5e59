//! Scan endpoint (equipment check-in / check-out)

use axum::{extract::State, Json};
use validator::Validate;

use crate::{
    error::AppResult,
    models::scan::{ScanRequest, ScanResponse},
};

/// Process an equipment scan.
///
/// The direction is taken from `action` when present, otherwise inferred
/// from the current equipment status. Check-outs beyond the available
/// quantity fail with a 409 carrying the actual available count.
#[utoipa::path(
    post,
    path = "/scan",
    tag = "scan",
    request_body = ScanRequest,
    responses(
        (status = 200, description = "Scan processed", body = ScanResponse),
        (status = 404, description = "Unknown equipment code", body = crate::error::ErrorResponse),
        (status = 409, description = "Not enough units available", body = crate::error::ErrorResponse)
    )
)]
pub async fn process_scan(
    State(state): State<crate::AppState>,
    Json(data): Json<ScanRequest>,
) -> AppResult<Json<ScanResponse>> {
    data.validate()?;
    let response = state.services.scan.process(&data).await?;
    Ok(Json(response))
}
