//! Checklist template API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::template::{CreateTemplate, Template, TemplateDetails},
};

/// List all templates
#[utoipa::path(
    get,
    path = "/templates",
    tag = "templates",
    responses(
        (status = 200, description = "Template list", body = Vec<Template>)
    )
)]
pub async fn list_templates(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Template>>> {
    let templates = state.services.templates.list().await?;
    Ok(Json(templates))
}

/// Get template by ID with its items
#[utoipa::path(
    get,
    path = "/templates/{id}",
    tag = "templates",
    params(("id" = String, Path, description = "Template ID")),
    responses(
        (status = 200, description = "Template with items", body = TemplateDetails)
    )
)]
pub async fn get_template(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<TemplateDetails>> {
    let details = state.services.templates.get_details(&id).await?;
    Ok(Json(details))
}

/// Create a template
#[utoipa::path(
    post,
    path = "/templates",
    tag = "templates",
    request_body = CreateTemplate,
    responses(
        (status = 201, description = "Template created", body = Template)
    )
)]
pub async fn create_template(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateTemplate>,
) -> AppResult<(StatusCode, Json<Template>)> {
    data.validate()?;
    let template = state.services.templates.create(&data).await?;
    Ok((StatusCode::CREATED, Json(template)))
}

/// Delete a template
#[utoipa::path(
    delete,
    path = "/templates/{id}",
    tag = "templates",
    params(("id" = String, Path, description = "Template ID")),
    responses(
        (status = 204, description = "Template deleted")
    )
)]
pub async fn delete_template(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.templates.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
