//! Equipment model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use utoipa::ToSchema;
use validator::Validate;

/// Live check-out state of an equipment item.
///
/// Derived from the quantity counters, never set directly:
/// `In ⇔ quantity_out == 0`, `Out ⇔ quantity_out == quantity`,
/// `Partial` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum EquipmentStatus {
    In,
    Out,
    Partial,
}

impl EquipmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentStatus::In => "IN",
            EquipmentStatus::Out => "OUT",
            EquipmentStatus::Partial => "PARTIAL",
        }
    }

    /// Recompute the status from the quantity counters.
    pub fn from_quantities(quantity_out: i32, quantity: i32) -> Self {
        if quantity_out <= 0 {
            EquipmentStatus::In
        } else if quantity_out >= quantity {
            EquipmentStatus::Out
        } else {
            EquipmentStatus::Partial
        }
    }
}

impl fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for EquipmentStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "IN" => Ok(EquipmentStatus::In),
            "OUT" => Ok(EquipmentStatus::Out),
            "PARTIAL" => Ok(EquipmentStatus::Partial),
            other => Err(format!("unknown equipment status '{}'", other)),
        }
    }
}

/// Equipment record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Equipment {
    /// Scan code, e.g. "EQ1714056000000"
    pub id: String,
    pub name: String,
    #[sqlx(try_from = "String")]
    pub status: EquipmentStatus,
    /// Current location ("Warehouse" is home base)
    pub location: String,
    /// Total number of units
    pub quantity: i32,
    /// Units currently checked out (0 <= quantity_out <= quantity)
    pub quantity_out: i32,
    /// Units checkable-out right now (quantity - quantity_out)
    pub quantity_available: i32,
    pub photo_url: Option<String>,
    pub category_id: Option<String>,
    pub last_updated: DateTime<Utc>,
}

/// Create equipment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEquipment {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Number of units, defaults to 1
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: Option<i32>,
    pub location: Option<String>,
    pub category_id: Option<String>,
}

/// Update equipment request (partial; absent fields are left unchanged)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEquipment {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    /// New total quantity; must stay >= quantity currently out
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: Option<i32>,
    pub location: Option<String>,
    pub category_id: Option<String>,
    pub photo_url: Option<String>,
}

/// Equipment row as carried by export/import payloads
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct EquipmentTransfer {
    #[validate(length(min = 1, message = "Id is required"))]
    pub id: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub status: EquipmentStatus,
    pub location: String,
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,
    pub quantity_out: i32,
    pub category_id: Option<String>,
    pub last_updated: DateTime<Utc>,
}
