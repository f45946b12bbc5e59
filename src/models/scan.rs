//! Scan request/response types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::equipment::Equipment;
use super::history::ScanAction;

/// Scan request (check equipment in or out)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ScanRequest {
    /// Equipment scan code
    #[validate(length(min = 1, message = "Code is required"))]
    pub code: String,
    /// Units to move, defaults to 1. Zero is accepted as a no-op-like scan.
    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    pub quantity: Option<i32>,
    /// Destination on check-out ("Unknown" when omitted)
    pub location: Option<String>,
    /// Event to tick on its checklist; auto-enrolls the equipment if absent
    pub event_id: Option<String>,
    /// Identity recorded in the audit trail ("Unknown User" when omitted)
    pub scanned_by: Option<String>,
    /// Explicit direction; inferred from the current status when omitted
    pub action: Option<ScanAction>,
}

/// Scan response
#[derive(Debug, Serialize, ToSchema)]
pub struct ScanResponse {
    /// Human-readable summary; machine consumers should use `equipment`
    pub message: String,
    pub equipment: Equipment,
}
