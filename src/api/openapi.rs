//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{categories, equipment, events, health, history, scan, templates, transfer};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "GearTrack API",
        version = "1.0.0",
        description = "Equipment check-in/check-out tracker for event production inventory",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Scan
        scan::process_scan,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        equipment::upload_photo,
        // Events & checklists
        events::list_events,
        events::get_event,
        events::create_event,
        events::update_event,
        events::delete_event,
        events::add_checklist_entry,
        events::update_checklist_entry,
        events::remove_checklist_entry,
        events::apply_template,
        // Templates
        templates::list_templates,
        templates::get_template,
        templates::create_template,
        templates::delete_template,
        // Categories
        categories::list_categories,
        categories::create_category,
        categories::delete_category,
        // History
        history::list_history,
        // Transfer
        transfer::export_data,
        transfer::import_data,
    ),
    components(
        schemas(
            // Scan
            crate::models::scan::ScanRequest,
            crate::models::scan::ScanResponse,
            crate::models::history::ScanAction,
            // Equipment
            crate::models::equipment::Equipment,
            crate::models::equipment::EquipmentStatus,
            crate::models::equipment::CreateEquipment,
            crate::models::equipment::UpdateEquipment,
            crate::models::equipment::EquipmentTransfer,
            // Events
            crate::models::event::Event,
            crate::models::event::EventQuery,
            crate::models::event::CreateEvent,
            crate::models::event::UpdateEvent,
            crate::models::event::EventDetails,
            crate::models::event::ChecklistEntry,
            crate::models::event::ChecklistEntryDetails,
            crate::models::event::AddChecklistEntry,
            crate::models::event::UpdateChecklistEntry,
            events::EventsListResponse,
            events::ApplyTemplateResponse,
            // Templates
            crate::models::template::Template,
            crate::models::template::TemplateItem,
            crate::models::template::TemplateDetails,
            crate::models::template::CreateTemplate,
            crate::models::template::CreateTemplateItem,
            crate::models::template::ApplyTemplate,
            // Categories
            crate::models::category::Category,
            crate::models::category::CreateCategory,
            // History
            crate::models::history::HistoryEntry,
            crate::models::history::HistoryQuery,
            history::HistoryListResponse,
            // Transfer
            transfer::ImportRequest,
            transfer::ImportResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "scan", description = "Equipment check-in/check-out scanning"),
        (name = "equipment", description = "Equipment inventory management"),
        (name = "events", description = "Events and equipment checklists"),
        (name = "templates", description = "Reusable checklist templates"),
        (name = "categories", description = "Equipment categories"),
        (name = "history", description = "Scan audit trail"),
        (name = "transfer", description = "Bulk export and import")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
