//! Events API endpoints (events, checklists, template application)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::AppResult,
    models::event::{
        AddChecklistEntry, ChecklistEntry, CreateEvent, Event, EventDetails, EventQuery,
        UpdateChecklistEntry, UpdateEvent,
    },
    models::template::ApplyTemplate,
};

/// Paginated events response
#[derive(Serialize, ToSchema)]
pub struct EventsListResponse {
    pub events: Vec<Event>,
    pub total: i64,
}

/// Result of applying a template to an event
#[derive(Serialize, ToSchema)]
pub struct ApplyTemplateResponse {
    /// Checklist entries added (items already present are skipped)
    pub added: u64,
}

/// List events with filters and pagination
#[utoipa::path(
    get,
    path = "/events",
    tag = "events",
    params(EventQuery),
    responses(
        (status = 200, description = "Events list", body = EventsListResponse)
    )
)]
pub async fn list_events(
    State(state): State<crate::AppState>,
    Query(query): Query<EventQuery>,
) -> AppResult<Json<EventsListResponse>> {
    let (events, total) = state.services.events.list(&query).await?;
    Ok(Json(EventsListResponse { events, total }))
}

/// Get event by ID with its checklist
#[utoipa::path(
    get,
    path = "/events/{id}",
    tag = "events",
    params(("id" = String, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event with checklist", body = EventDetails)
    )
)]
pub async fn get_event(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<EventDetails>> {
    let details = state.services.events.get_details(&id).await?;
    Ok(Json(details))
}

/// Create an event
#[utoipa::path(
    post,
    path = "/events",
    tag = "events",
    request_body = CreateEvent,
    responses(
        (status = 201, description = "Event created", body = Event)
    )
)]
pub async fn create_event(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateEvent>,
) -> AppResult<(StatusCode, Json<Event>)> {
    data.validate()?;
    let event = state.services.events.create(&data).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// Update an event
#[utoipa::path(
    put,
    path = "/events/{id}",
    tag = "events",
    params(("id" = String, Path, description = "Event ID")),
    request_body = UpdateEvent,
    responses(
        (status = 200, description = "Event updated", body = Event)
    )
)]
pub async fn update_event(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(data): Json<UpdateEvent>,
) -> AppResult<Json<Event>> {
    let event = state.services.events.update(&id, &data).await?;
    Ok(Json(event))
}

/// Delete an event and its checklist
#[utoipa::path(
    delete,
    path = "/events/{id}",
    tag = "events",
    params(("id" = String, Path, description = "Event ID")),
    responses(
        (status = 204, description = "Event deleted")
    )
)]
pub async fn delete_event(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.events.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Add equipment to an event checklist
#[utoipa::path(
    post,
    path = "/events/{id}/checklist",
    tag = "events",
    params(("id" = String, Path, description = "Event ID")),
    request_body = AddChecklistEntry,
    responses(
        (status = 201, description = "Checklist entry added", body = ChecklistEntry),
        (status = 409, description = "Equipment already on the checklist", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_checklist_entry(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(data): Json<AddChecklistEntry>,
) -> AppResult<(StatusCode, Json<ChecklistEntry>)> {
    data.validate()?;
    let entry = state.services.events.add_checklist_entry(&id, &data).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// Update a checklist entry (flags, notes)
#[utoipa::path(
    put,
    path = "/events/{id}/checklist/{entry_id}",
    tag = "events",
    params(
        ("id" = String, Path, description = "Event ID"),
        ("entry_id" = i32, Path, description = "Checklist entry ID")
    ),
    request_body = UpdateChecklistEntry,
    responses(
        (status = 200, description = "Checklist entry updated", body = ChecklistEntry)
    )
)]
pub async fn update_checklist_entry(
    State(state): State<crate::AppState>,
    Path((id, entry_id)): Path<(String, i32)>,
    Json(data): Json<UpdateChecklistEntry>,
) -> AppResult<Json<ChecklistEntry>> {
    let entry = state
        .services
        .events
        .update_checklist_entry(&id, entry_id, &data)
        .await?;
    Ok(Json(entry))
}

/// Remove equipment from an event checklist
#[utoipa::path(
    delete,
    path = "/events/{id}/checklist/{entry_id}",
    tag = "events",
    params(
        ("id" = String, Path, description = "Event ID"),
        ("entry_id" = i32, Path, description = "Checklist entry ID")
    ),
    responses(
        (status = 204, description = "Checklist entry removed")
    )
)]
pub async fn remove_checklist_entry(
    State(state): State<crate::AppState>,
    Path((id, entry_id)): Path<(String, i32)>,
) -> AppResult<StatusCode> {
    state
        .services
        .events
        .remove_checklist_entry(&id, entry_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Apply a template to an event checklist
#[utoipa::path(
    post,
    path = "/events/{id}/apply-template",
    tag = "events",
    params(("id" = String, Path, description = "Event ID")),
    request_body = ApplyTemplate,
    responses(
        (status = 200, description = "Template applied", body = ApplyTemplateResponse)
    )
)]
pub async fn apply_template(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(data): Json<ApplyTemplate>,
) -> AppResult<Json<ApplyTemplateResponse>> {
    data.validate()?;
    let added = state
        .services
        .templates
        .apply_to_event(&data.template_id, &id)
        .await?;
    Ok(Json(ApplyTemplateResponse { added }))
}
