//! Equipment repository

use chrono::Utc;
use sqlx::{Pool, Postgres};

use super::generate_id;
use crate::{
    error::{AppError, AppResult},
    models::equipment::{
        CreateEquipment, Equipment, EquipmentStatus, EquipmentTransfer, UpdateEquipment,
    },
};

/// Column list shared by every equipment SELECT; exposes the derived
/// availability alongside the stored counters.
const EQUIPMENT_COLS: &str = "*, quantity - quantity_out AS quantity_available";

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Postgres>,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all equipment ordered by name
    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        let rows = sqlx::query_as::<_, Equipment>(&format!(
            "SELECT {} FROM equipment ORDER BY name",
            EQUIPMENT_COLS
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get equipment by ID
    pub async fn get_by_id(&self, id: &str) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>(&format!(
            "SELECT {} FROM equipment WHERE id = $1",
            EQUIPMENT_COLS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Register new equipment (status IN, nothing checked out)
    pub async fn create(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        let id = generate_id("EQ");
        let quantity = data.quantity.unwrap_or(1);
        let location = data.location.as_deref().unwrap_or("Warehouse");

        let row = sqlx::query_as::<_, Equipment>(&format!(
            r#"
            INSERT INTO equipment (id, name, status, location, quantity, quantity_out, category_id, last_updated)
            VALUES ($1, $2, $3, $4, $5, 0, $6, $7)
            RETURNING {}
            "#,
            EQUIPMENT_COLS
        ))
        .bind(&id)
        .bind(&data.name)
        .bind(EquipmentStatus::In.as_str())
        .bind(location)
        .bind(quantity)
        .bind(&data.category_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Apply a partial edit.
    ///
    /// Runs under a row lock so a quantity change cannot race with an
    /// in-flight scan: the status is recomputed from the merged counters
    /// and a quantity below the amount currently out is rejected.
    pub async fn update(&self, id: &str, data: &UpdateEquipment) -> AppResult<Equipment> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, Equipment>(&format!(
            "SELECT {} FROM equipment WHERE id = $1 FOR UPDATE",
            EQUIPMENT_COLS
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))?;

        let quantity = data.quantity.unwrap_or(current.quantity);
        if quantity < current.quantity_out {
            return Err(AppError::Validation(format!(
                "Quantity cannot be lowered below the {} units currently out",
                current.quantity_out
            )));
        }
        let status = EquipmentStatus::from_quantities(current.quantity_out, quantity);

        let row = sqlx::query_as::<_, Equipment>(&format!(
            r#"
            UPDATE equipment
            SET name = $2,
                quantity = $3,
                status = $4,
                location = $5,
                category_id = COALESCE($6, category_id),
                photo_url = COALESCE($7, photo_url),
                last_updated = $8
            WHERE id = $1
            RETURNING {}
            "#,
            EQUIPMENT_COLS
        ))
        .bind(id)
        .bind(data.name.as_deref().unwrap_or(&current.name))
        .bind(quantity)
        .bind(status.as_str())
        .bind(data.location.as_deref().unwrap_or(&current.location))
        .bind(&data.category_id)
        .bind(&data.photo_url)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row)
    }

    /// Record the stored photo for an equipment item
    pub async fn set_photo_url(&self, id: &str, photo_url: &str) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>(&format!(
            "UPDATE equipment SET photo_url = $2, last_updated = $3 WHERE id = $1 RETURNING {}",
            EQUIPMENT_COLS
        ))
        .bind(id)
        .bind(photo_url)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Delete equipment, returning the removed row so the caller can clean
    /// up the stored photo file. Checklist and template references cascade.
    pub async fn delete(&self, id: &str) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>(&format!(
            "DELETE FROM equipment WHERE id = $1 RETURNING {}",
            EQUIPMENT_COLS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Export all equipment rows
    pub async fn export(&self) -> AppResult<Vec<EquipmentTransfer>> {
        let rows = sqlx::query_as::<_, Equipment>(&format!(
            "SELECT {} FROM equipment ORDER BY name",
            EQUIPMENT_COLS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|e| EquipmentTransfer {
                id: e.id,
                name: e.name,
                status: e.status,
                location: e.location,
                quantity: e.quantity,
                quantity_out: e.quantity_out,
                category_id: e.category_id,
                last_updated: e.last_updated,
            })
            .collect())
    }

    /// Upsert a batch of equipment rows by id. The status is recomputed
    /// from the imported counters so the invariant survives hand-edited
    /// payloads. Returns the number of rows written.
    pub async fn import(&self, items: &[EquipmentTransfer]) -> AppResult<usize> {
        let mut tx = self.pool.begin().await?;

        for item in items {
            if item.quantity_out < 0 || item.quantity_out > item.quantity {
                return Err(AppError::Validation(format!(
                    "Equipment {}: quantity_out {} outside 0..={}",
                    item.id, item.quantity_out, item.quantity
                )));
            }
            let status = EquipmentStatus::from_quantities(item.quantity_out, item.quantity);

            sqlx::query(
                r#"
                INSERT INTO equipment (id, name, status, location, quantity, quantity_out, category_id, last_updated)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                ON CONFLICT (id) DO UPDATE
                SET name = EXCLUDED.name,
                    status = EXCLUDED.status,
                    location = EXCLUDED.location,
                    quantity = EXCLUDED.quantity,
                    quantity_out = EXCLUDED.quantity_out,
                    category_id = EXCLUDED.category_id,
                    last_updated = EXCLUDED.last_updated
                "#,
            )
            .bind(&item.id)
            .bind(&item.name)
            .bind(status.as_str())
            .bind(&item.location)
            .bind(item.quantity)
            .bind(item.quantity_out)
            .bind(&item.category_id)
            .bind(item.last_updated)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(items.len())
    }
}
