//! Export / import API endpoints

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{error::AppResult, models::equipment::EquipmentTransfer};

/// Import request payload
#[derive(Deserialize, ToSchema)]
pub struct ImportRequest {
    pub equipment: Vec<EquipmentTransfer>,
}

/// Import result
#[derive(Serialize, ToSchema)]
pub struct ImportResponse {
    pub imported: usize,
    pub message: String,
}

/// Export all equipment data
#[utoipa::path(
    get,
    path = "/export",
    tag = "transfer",
    responses(
        (status = 200, description = "All equipment rows", body = Vec<EquipmentTransfer>)
    )
)]
pub async fn export_data(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<EquipmentTransfer>>> {
    let rows = state.services.equipment.export().await?;
    Ok(Json(rows))
}

/// Import equipment data (upsert by id)
#[utoipa::path(
    post,
    path = "/import",
    tag = "transfer",
    request_body = ImportRequest,
    responses(
        (status = 200, description = "Import result", body = ImportResponse)
    )
)]
pub async fn import_data(
    State(state): State<crate::AppState>,
    Json(data): Json<ImportRequest>,
) -> AppResult<Json<ImportResponse>> {
    for item in &data.equipment {
        item.validate()?;
    }
    let imported = state.services.equipment.import(&data.equipment).await?;
    Ok(Json(ImportResponse {
        imported,
        message: format!("Imported {} items successfully", imported),
    }))
}
