//! Checklist template model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Reusable checklist template
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Template {
    /// Server-generated id, e.g. "TPL1714056000000"
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

/// One equipment line of a template
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TemplateItem {
    pub id: i32,
    pub template_id: String,
    pub equipment_id: String,
    pub quantity: i32,
}

/// Create template request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTemplate {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub description: Option<String>,
    /// Equipment lines to seed the template with
    #[serde(default)]
    #[validate(nested)]
    pub items: Vec<CreateTemplateItem>,
}

/// One equipment line of a create-template request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTemplateItem {
    #[validate(length(min = 1, message = "Equipment ID is required"))]
    pub equipment_id: String,
    /// Defaults to 1
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: Option<i32>,
}

/// Template with its items, as returned by the detail endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct TemplateDetails {
    pub template: Template,
    pub items: Vec<TemplateItem>,
}

/// Apply a template to an event
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ApplyTemplate {
    #[validate(length(min = 1, message = "Template ID is required"))]
    pub template_id: String,
}
