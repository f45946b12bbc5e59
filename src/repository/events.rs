//! Events repository (events and their equipment checklists)

use chrono::{NaiveDate, Utc};
use sqlx::{Pool, Postgres};

use super::generate_id;
use crate::{
    error::{AppError, AppResult},
    models::event::{
        AddChecklistEntry, ChecklistEntry, ChecklistEntryDetails, CreateEvent, Event, EventQuery,
        UpdateEvent, UpdateChecklistEntry,
    },
};

#[derive(Clone)]
pub struct EventsRepository {
    pool: Pool<Postgres>,
}

impl EventsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List events with optional filters and pagination, newest first
    pub async fn list(&self, query: &EventQuery) -> AppResult<(Vec<Event>, i64)> {
        let page = query.page.unwrap_or(1);
        let per_page = query.per_page.unwrap_or(50);
        let offset = (page - 1) * per_page;

        let mut conditions = Vec::new();
        let mut idx = 1;

        if query.status.is_some() {
            conditions.push(format!("status = ${}", idx));
            idx += 1;
        }
        if query.event_type.is_some() {
            conditions.push(format!("event_type = ${}", idx));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        // Count total
        let count_q = format!("SELECT COUNT(*) FROM events {}", where_clause);
        let mut count_builder = sqlx::query_scalar::<_, i64>(&count_q);
        if let Some(ref st) = query.status {
            count_builder = count_builder.bind(st);
        }
        if let Some(ref et) = query.event_type {
            count_builder = count_builder.bind(et);
        }
        let total = count_builder.fetch_one(&self.pool).await?;

        // Fetch rows
        let select_q = format!(
            "SELECT * FROM events {} ORDER BY event_date DESC LIMIT {} OFFSET {}",
            where_clause, per_page, offset
        );
        let mut builder = sqlx::query_as::<_, Event>(&select_q);
        if let Some(ref st) = query.status {
            builder = builder.bind(st);
        }
        if let Some(ref et) = query.event_type {
            builder = builder.bind(et);
        }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok((rows, total))
    }

    /// Get event by ID
    pub async fn get_by_id(&self, id: &str) -> AppResult<Event> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", id)))
    }

    /// Create an event (starts in PLANNING)
    pub async fn create(&self, data: &CreateEvent) -> AppResult<Event> {
        let event_date = NaiveDate::parse_from_str(&data.event_date, "%Y-%m-%d")
            .map_err(|_| AppError::Validation("Invalid event_date".to_string()))?;
        let id = generate_id("EV");

        let row = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (id, name, event_type, event_date, location, status, notes, created_at)
            VALUES ($1, $2, $3, $4, $5, 'PLANNING', $6, $7)
            RETURNING *
            "#,
        )
        .bind(&id)
        .bind(&data.name)
        .bind(&data.event_type)
        .bind(event_date)
        .bind(&data.location)
        .bind(&data.notes)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Apply a partial edit to an event
    pub async fn update(&self, id: &str, data: &UpdateEvent) -> AppResult<Event> {
        let event_date = match data.event_date.as_deref() {
            Some(s) => Some(
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .map_err(|_| AppError::Validation("Invalid event_date".to_string()))?,
            ),
            None => None,
        };

        sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET name = COALESCE($2, name),
                event_type = COALESCE($3, event_type),
                event_date = COALESCE($4, event_date),
                location = COALESCE($5, location),
                status = COALESCE($6, status),
                notes = COALESCE($7, notes)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.event_type)
        .bind(event_date)
        .bind(&data.location)
        .bind(&data.status)
        .bind(&data.notes)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Event {} not found", id)))
    }

    /// Delete an event; its checklist entries cascade
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Event {} not found", id)));
        }
        Ok(())
    }

    /// Checklist entries for an event with joined equipment details
    pub async fn checklist(&self, event_id: &str) -> AppResult<Vec<ChecklistEntryDetails>> {
        let rows = sqlx::query_as::<_, ChecklistEntryDetails>(
            r#"
            SELECT ee.id, ee.event_id, ee.equipment_id, ee.checked_out, ee.checked_in, ee.notes,
                   e.name AS equipment_name, e.status AS equipment_status
            FROM event_equipment ee
            JOIN equipment e ON ee.equipment_id = e.id
            WHERE ee.event_id = $1
            ORDER BY e.name
            "#,
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Add an equipment item to an event checklist
    pub async fn add_checklist_entry(
        &self,
        event_id: &str,
        data: &AddChecklistEntry,
    ) -> AppResult<ChecklistEntry> {
        // Surface missing event/equipment as NotFound rather than a raw
        // foreign key violation.
        self.get_by_id(event_id).await?;
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM equipment WHERE id = $1)")
            .bind(&data.equipment_id)
            .fetch_one(&self.pool)
            .await?;
        if !exists {
            return Err(AppError::NotFound(format!(
                "Equipment {} not found",
                data.equipment_id
            )));
        }

        let row = sqlx::query_as::<_, ChecklistEntry>(
            r#"
            INSERT INTO event_equipment (event_id, equipment_id, checked_out, checked_in, notes)
            VALUES ($1, $2, FALSE, FALSE, $3)
            ON CONFLICT (event_id, equipment_id) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(event_id)
        .bind(&data.equipment_id)
        .bind(&data.notes)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            AppError::Conflict(format!(
                "Equipment {} already on the checklist",
                data.equipment_id
            ))
        })?;
        Ok(row)
    }

    /// Update a checklist entry's completion flags and notes
    pub async fn update_checklist_entry(
        &self,
        event_id: &str,
        entry_id: i32,
        data: &UpdateChecklistEntry,
    ) -> AppResult<ChecklistEntry> {
        sqlx::query_as::<_, ChecklistEntry>(
            r#"
            UPDATE event_equipment
            SET checked_out = COALESCE($3, checked_out),
                checked_in = COALESCE($4, checked_in),
                notes = COALESCE($5, notes)
            WHERE id = $1 AND event_id = $2
            RETURNING *
            "#,
        )
        .bind(entry_id)
        .bind(event_id)
        .bind(data.checked_out)
        .bind(data.checked_in)
        .bind(&data.notes)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Checklist entry {} not found", entry_id)))
    }

    /// Remove a checklist entry
    pub async fn remove_checklist_entry(&self, event_id: &str, entry_id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM event_equipment WHERE id = $1 AND event_id = $2")
            .bind(entry_id)
            .bind(event_id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Checklist entry {} not found",
                entry_id
            )));
        }
        Ok(())
    }
}
