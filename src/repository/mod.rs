//! Repository layer for database operations

pub mod categories;
pub mod equipment;
pub mod events;
pub mod history;
pub mod scan;
pub mod templates;

use chrono::Utc;
use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub equipment: equipment::EquipmentRepository,
    pub events: events::EventsRepository,
    pub templates: templates::TemplatesRepository,
    pub categories: categories::CategoriesRepository,
    pub history: history::HistoryRepository,
    pub scan: scan::ScanRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            equipment: equipment::EquipmentRepository::new(pool.clone()),
            events: events::EventsRepository::new(pool.clone()),
            templates: templates::TemplatesRepository::new(pool.clone()),
            categories: categories::CategoriesRepository::new(pool.clone()),
            history: history::HistoryRepository::new(pool.clone()),
            scan: scan::ScanRepository::new(pool.clone()),
            pool,
        }
    }
}

/// Generate a prefixed identifier from the current epoch millis
/// ("EQ1714056000000" style, matching the codes printed on scan labels).
pub(crate) fn generate_id(prefix: &str) -> String {
    format!("{}{}", prefix, Utc::now().timestamp_millis())
}
