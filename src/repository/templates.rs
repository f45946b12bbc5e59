//! Checklist templates repository

use sqlx::{Pool, Postgres};

use super::generate_id;
use crate::{
    error::{AppError, AppResult},
    models::template::{CreateTemplate, Template, TemplateItem},
};

#[derive(Clone)]
pub struct TemplatesRepository {
    pool: Pool<Postgres>,
}

impl TemplatesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all templates ordered by name
    pub async fn list(&self) -> AppResult<Vec<Template>> {
        let rows = sqlx::query_as::<_, Template>("SELECT * FROM templates ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get template by ID
    pub async fn get_by_id(&self, id: &str) -> AppResult<Template> {
        sqlx::query_as::<_, Template>("SELECT * FROM templates WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Template {} not found", id)))
    }

    /// Items of a template
    pub async fn items(&self, template_id: &str) -> AppResult<Vec<TemplateItem>> {
        let rows = sqlx::query_as::<_, TemplateItem>(
            "SELECT * FROM template_items WHERE template_id = $1 ORDER BY id",
        )
        .bind(template_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a template together with its items
    pub async fn create(&self, data: &CreateTemplate) -> AppResult<Template> {
        let id = generate_id("TPL");
        let mut tx = self.pool.begin().await?;

        let template = sqlx::query_as::<_, Template>(
            r#"
            INSERT INTO templates (id, name, description)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&id)
        .bind(&data.name)
        .bind(&data.description)
        .fetch_one(&mut *tx)
        .await?;

        for item in &data.items {
            sqlx::query(
                r#"
                INSERT INTO template_items (template_id, equipment_id, quantity)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(&id)
            .bind(&item.equipment_id)
            .bind(item.quantity.unwrap_or(1))
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(template)
    }

    /// Delete a template; its items cascade
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM templates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Template {} not found", id)));
        }
        Ok(())
    }

    /// Apply a template to an event: insert checklist entries for items the
    /// checklist does not yet have. Returns how many were added.
    pub async fn apply_to_event(&self, template_id: &str, event_id: &str) -> AppResult<u64> {
        self.get_by_id(template_id).await?;
        let event_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM events WHERE id = $1)")
                .bind(event_id)
                .fetch_one(&self.pool)
                .await?;
        if !event_exists {
            return Err(AppError::NotFound(format!("Event {} not found", event_id)));
        }

        let result = sqlx::query(
            r#"
            INSERT INTO event_equipment (event_id, equipment_id, checked_out, checked_in)
            SELECT $1, ti.equipment_id, FALSE, FALSE
            FROM template_items ti
            WHERE ti.template_id = $2
            ON CONFLICT (event_id, equipment_id) DO NOTHING
            "#,
        )
        .bind(event_id)
        .bind(template_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
