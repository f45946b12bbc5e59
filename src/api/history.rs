//! Scan history API endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::history::{HistoryEntry, HistoryQuery},
};

/// Paginated history response
#[derive(Serialize, ToSchema)]
pub struct HistoryListResponse {
    pub entries: Vec<HistoryEntry>,
    pub total: i64,
}

/// Query the scan audit trail
#[utoipa::path(
    get,
    path = "/history",
    tag = "history",
    params(HistoryQuery),
    responses(
        (status = 200, description = "History entries", body = HistoryListResponse)
    )
)]
pub async fn list_history(
    State(state): State<crate::AppState>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<HistoryListResponse>> {
    let (entries, total) = state.services.history.list(&query).await?;
    Ok(Json(HistoryListResponse { entries, total }))
}
