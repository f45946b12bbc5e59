//! Scan history repository (read side; rows are appended by the scan
//! processor and never modified)

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::history::{HistoryEntry, HistoryQuery},
};

#[derive(Clone)]
pub struct HistoryRepository {
    pool: Pool<Postgres>,
}

impl HistoryRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List history entries with optional filters and pagination, newest
    /// first
    pub async fn list(&self, query: &HistoryQuery) -> AppResult<(Vec<HistoryEntry>, i64)> {
        let page = query.page.unwrap_or(1);
        let per_page = query.per_page.unwrap_or(50);
        let offset = (page - 1) * per_page;

        let mut conditions = Vec::new();
        let mut idx = 1;

        if query.equipment_id.is_some() {
            conditions.push(format!("equipment_id = ${}", idx));
            idx += 1;
        }
        if query.action.is_some() {
            conditions.push(format!("action = ${}", idx));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let count_q = format!("SELECT COUNT(*) FROM history {}", where_clause);
        let mut count_builder = sqlx::query_scalar::<_, i64>(&count_q);
        if let Some(ref eq) = query.equipment_id {
            count_builder = count_builder.bind(eq);
        }
        if let Some(action) = query.action {
            count_builder = count_builder.bind(action.as_str());
        }
        let total = count_builder.fetch_one(&self.pool).await?;

        let select_q = format!(
            "SELECT * FROM history {} ORDER BY timestamp DESC, id DESC LIMIT {} OFFSET {}",
            where_clause, per_page, offset
        );
        let mut builder = sqlx::query_as::<_, HistoryEntry>(&select_q);
        if let Some(ref eq) = query.equipment_id {
            builder = builder.bind(eq);
        }
        if let Some(action) = query.action {
            builder = builder.bind(action.as_str());
        }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok((rows, total))
    }
}
