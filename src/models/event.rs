//! Event model and per-event equipment checklist

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::equipment::EquipmentStatus;

/// Event record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Event {
    /// Server-generated id, e.g. "EV1714056000000"
    pub id: String,
    pub name: String,
    /// Free-text kind (concert, conference, corporate, ...)
    pub event_type: String,
    pub event_date: NaiveDate,
    pub location: Option<String>,
    /// Lifecycle label (PLANNING, ACTIVE, DONE, ...), free text
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Create event request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEvent {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Type is required"))]
    pub event_type: String,
    /// Event date (YYYY-MM-DD)
    pub event_date: String,
    pub location: Option<String>,
    pub notes: Option<String>,
}

/// Update event request (partial)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateEvent {
    pub name: Option<String>,
    pub event_type: Option<String>,
    /// Event date (YYYY-MM-DD)
    pub event_date: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// Query parameters for events
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct EventQuery {
    /// Filter by status label
    pub status: Option<String>,
    /// Filter by event type
    pub event_type: Option<String>,
    /// Page number (1-based)
    pub page: Option<i64>,
    /// Items per page
    pub per_page: Option<i64>,
}

/// Checklist entry linking one event to one equipment item.
///
/// The checked_out / checked_in booleans are planning-completion signals
/// and are independent of the live equipment status.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ChecklistEntry {
    pub id: i32,
    pub event_id: String,
    pub equipment_id: String,
    pub checked_out: bool,
    pub checked_in: bool,
    pub notes: Option<String>,
}

/// Checklist entry joined with equipment details for display
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct ChecklistEntryDetails {
    pub id: i32,
    pub event_id: String,
    pub equipment_id: String,
    pub checked_out: bool,
    pub checked_in: bool,
    pub notes: Option<String>,
    pub equipment_name: String,
    #[sqlx(try_from = "String")]
    pub equipment_status: EquipmentStatus,
}

/// Add an equipment item to an event checklist
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddChecklistEntry {
    #[validate(length(min = 1, message = "Equipment ID is required"))]
    pub equipment_id: String,
    pub notes: Option<String>,
}

/// Update a checklist entry (partial)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateChecklistEntry {
    pub checked_out: Option<bool>,
    pub checked_in: Option<bool>,
    pub notes: Option<String>,
}

/// Event with its checklist, as returned by the detail endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct EventDetails {
    pub event: Event,
    pub checklist: Vec<ChecklistEntryDetails>,
}
