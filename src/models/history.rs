//! Scan history model (append-only audit trail)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use utoipa::{IntoParams, ToSchema};

/// Direction of a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScanAction {
    CheckOut,
    CheckIn,
}

impl ScanAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanAction::CheckOut => "CHECK_OUT",
            ScanAction::CheckIn => "CHECK_IN",
        }
    }
}

impl fmt::Display for ScanAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for ScanAction {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "CHECK_OUT" => Ok(ScanAction::CheckOut),
            "CHECK_IN" => Ok(ScanAction::CheckIn),
            other => Err(format!("unknown scan action '{}'", other)),
        }
    }
}

/// One audit trail row per scan. Never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct HistoryEntry {
    pub id: i64,
    pub equipment_id: String,
    #[sqlx(try_from = "String")]
    pub action: ScanAction,
    pub event_id: Option<String>,
    /// Event name resolved at scan time (null if the event was unknown)
    pub event_name: Option<String>,
    /// Location the equipment ended up at
    pub location: String,
    pub scanned_by: String,
    pub timestamp: DateTime<Utc>,
    /// Free-text note, conventionally "Quantity: N"
    pub note: Option<String>,
}

/// Query parameters for the history log
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct HistoryQuery {
    /// Filter by equipment id
    pub equipment_id: Option<String>,
    /// Filter by action (CHECK_IN / CHECK_OUT)
    pub action: Option<ScanAction>,
    /// Page number (1-based)
    pub page: Option<i64>,
    /// Items per page
    pub per_page: Option<i64>,
}
