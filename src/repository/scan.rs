//! Scan processor: the quantity-aware check-in/check-out transition.
//!
//! A scan is one short-lived unit of work: lock the equipment row, plan the
//! transition from the committed counters, then commit the row update, the
//! checklist flag and the history entry together. The row lock serializes
//! concurrent scans of the same code, so two check-outs can never both see
//! the same availability.

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        equipment::{Equipment, EquipmentStatus},
        history::ScanAction,
        scan::{ScanRequest, ScanResponse},
    },
};

const HOME_LOCATION: &str = "Warehouse";
const UNKNOWN_LOCATION: &str = "Unknown";
const UNKNOWN_SCANNER: &str = "Unknown User";

/// Planned outcome of a scan, computed before anything is written
#[derive(Debug, Clone, PartialEq, Eq)]
struct Transition {
    action: ScanAction,
    /// Units actually moved (check-ins are clamped to what is out)
    moved: i32,
    new_quantity_out: i32,
    new_status: EquipmentStatus,
    new_location: String,
    /// True when the item reached OUT, or came all the way back IN
    completed: bool,
    message: String,
}

/// Decide the direction and the resulting counters for a scan.
///
/// Pure with respect to the store; callers persist the result. Fails with
/// `InsufficientAvailability` when a check-out asks for more than
/// `quantity - quantity_out`, reporting the actual available count.
fn plan_transition(
    equipment: &Equipment,
    requested: i32,
    location: Option<&str>,
    explicit: Option<ScanAction>,
) -> AppResult<Transition> {
    if requested < 0 {
        return Err(AppError::Validation(
            "Scan quantity cannot be negative".to_string(),
        ));
    }

    let available = equipment.quantity - equipment.quantity_out;

    // Explicit direction wins; otherwise infer from the current status.
    // The PARTIAL fallback is a compatibility shim for callers that never
    // send an action: prefer checking out while anything is available.
    let action = explicit.unwrap_or(match equipment.status {
        EquipmentStatus::In => ScanAction::CheckOut,
        EquipmentStatus::Out => ScanAction::CheckIn,
        EquipmentStatus::Partial => {
            if available > 0 {
                ScanAction::CheckOut
            } else {
                ScanAction::CheckIn
            }
        }
    });

    match action {
        ScanAction::CheckOut => {
            if requested > available {
                return Err(AppError::InsufficientAvailability(format!(
                    "Only {} of {} {} available",
                    available, equipment.quantity, equipment.name
                )));
            }

            let new_quantity_out = equipment.quantity_out + requested;
            let new_status = EquipmentStatus::from_quantities(new_quantity_out, equipment.quantity);
            let new_location = location
                .filter(|l| !l.is_empty())
                .unwrap_or(UNKNOWN_LOCATION)
                .to_string();
            let completed = new_quantity_out >= equipment.quantity;

            let message = if completed {
                format!(
                    "{}: ALL {} checked OUT to: {}",
                    equipment.name, equipment.quantity, new_location
                )
            } else {
                format!(
                    "{}: {} checked OUT (Total out: {}/{}) to: {}",
                    equipment.name, requested, new_quantity_out, equipment.quantity, new_location
                )
            };

            Ok(Transition {
                action,
                moved: requested,
                new_quantity_out,
                new_status,
                new_location,
                completed,
                message,
            })
        }
        ScanAction::CheckIn => {
            // Over-requests clamp silently; the counter never goes negative.
            let moved = requested.min(equipment.quantity_out);
            let new_quantity_out = equipment.quantity_out - moved;
            let new_status = EquipmentStatus::from_quantities(new_quantity_out, equipment.quantity);
            let completed = new_quantity_out == 0;
            let new_location = if completed {
                HOME_LOCATION.to_string()
            } else {
                equipment.location.clone()
            };

            let message = if completed {
                format!(
                    "{}: ALL {} checked IN to {}",
                    equipment.name, equipment.quantity, HOME_LOCATION
                )
            } else {
                format!(
                    "{}: {} checked IN (Total out: {}/{})",
                    equipment.name, moved, new_quantity_out, equipment.quantity
                )
            };

            Ok(Transition {
                action,
                moved,
                new_quantity_out,
                new_status,
                new_location,
                completed,
                message,
            })
        }
    }
}

#[derive(Clone)]
pub struct ScanRepository {
    pool: Pool<Postgres>,
}

impl ScanRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Process one scan: validate against the locked row, persist the new
    /// counters, tick the event checklist and append the audit entry, all
    /// in a single transaction.
    pub async fn process(&self, req: &ScanRequest) -> AppResult<ScanResponse> {
        let requested = req.quantity.unwrap_or(1);
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, Equipment>(
            "SELECT *, quantity - quantity_out AS quantity_available \
             FROM equipment WHERE id = $1 FOR UPDATE",
        )
        .bind(&req.code)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", req.code)))?;

        let plan = plan_transition(&current, requested, req.location.as_deref(), req.action)?;

        let now = Utc::now();
        let updated = sqlx::query_as::<_, Equipment>(
            r#"
            UPDATE equipment
            SET status = $2, location = $3, quantity_out = $4, last_updated = $5
            WHERE id = $1
            RETURNING *, quantity - quantity_out AS quantity_available
            "#,
        )
        .bind(&req.code)
        .bind(plan.new_status.as_str())
        .bind(&plan.new_location)
        .bind(plan.new_quantity_out)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        // Resolve the event name for the audit trail; a stale event id is
        // recorded with a null name rather than rejected.
        let event_name: Option<String> = match &req.event_id {
            Some(event_id) => {
                sqlx::query_scalar("SELECT name FROM events WHERE id = $1")
                    .bind(event_id)
                    .fetch_optional(&mut *tx)
                    .await?
            }
            None => None,
        };

        // Tick the event checklist. A check-out auto-enrolls the equipment
        // on the checklist; a check-in only marks completion when every
        // unit came back.
        if let Some(event_id) = req.event_id.as_deref().filter(|_| event_name.is_some()) {
            match plan.action {
                ScanAction::CheckOut => {
                    sqlx::query(
                        r#"
                        INSERT INTO event_equipment (event_id, equipment_id, checked_out, checked_in)
                        VALUES ($1, $2, TRUE, FALSE)
                        ON CONFLICT (event_id, equipment_id)
                        DO UPDATE SET checked_out = TRUE
                        "#,
                    )
                    .bind(event_id)
                    .bind(&req.code)
                    .execute(&mut *tx)
                    .await?;
                }
                ScanAction::CheckIn if plan.completed => {
                    sqlx::query(
                        r#"
                        INSERT INTO event_equipment (event_id, equipment_id, checked_out, checked_in)
                        VALUES ($1, $2, FALSE, TRUE)
                        ON CONFLICT (event_id, equipment_id)
                        DO UPDATE SET checked_in = TRUE
                        "#,
                    )
                    .bind(event_id)
                    .bind(&req.code)
                    .execute(&mut *tx)
                    .await?;
                }
                ScanAction::CheckIn => {} // partial returns leave the flag alone
            }
        }

        sqlx::query(
            r#"
            INSERT INTO history (equipment_id, action, event_id, event_name, location, scanned_by, timestamp, note)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(&req.code)
        .bind(plan.action.as_str())
        .bind(&req.event_id)
        .bind(&event_name)
        .bind(&plan.new_location)
        .bind(req.scanned_by.as_deref().unwrap_or(UNKNOWN_SCANNER))
        .bind(now)
        .bind(format!("Quantity: {}", plan.moved))
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(ScanResponse {
            message: plan.message,
            equipment: updated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: i32, quantity_out: i32) -> Equipment {
        Equipment {
            id: "EQ1".to_string(),
            name: "Mixer".to_string(),
            status: EquipmentStatus::from_quantities(quantity_out, quantity),
            location: if quantity_out == 0 {
                "Warehouse".to_string()
            } else {
                "TruckA".to_string()
            },
            quantity,
            quantity_out,
            quantity_available: quantity - quantity_out,
            photo_url: None,
            category_id: None,
            last_updated: Utc::now(),
        }
    }

    fn status_matches_counters(t: &Transition, quantity: i32) -> bool {
        t.new_status == EquipmentStatus::from_quantities(t.new_quantity_out, quantity)
    }

    #[test]
    fn partial_check_out_sets_partial_status_and_location() {
        let t = plan_transition(&item(3, 0), 2, Some("TruckA"), None).unwrap();
        assert_eq!(t.action, ScanAction::CheckOut);
        assert_eq!(t.new_quantity_out, 2);
        assert_eq!(t.new_status, EquipmentStatus::Partial);
        assert_eq!(t.new_location, "TruckA");
        assert!(t.message.contains("2 checked OUT (Total out: 2/3)"));
        assert!(status_matches_counters(&t, 3));
    }

    #[test]
    fn completing_check_out_reports_all_units() {
        let t = plan_transition(&item(3, 2), 1, None, Some(ScanAction::CheckOut)).unwrap();
        assert_eq!(t.new_quantity_out, 3);
        assert_eq!(t.new_status, EquipmentStatus::Out);
        assert!(t.completed);
        assert!(t.message.contains("ALL 3 checked OUT"));
    }

    #[test]
    fn check_out_beyond_available_fails_with_count() {
        let err = plan_transition(&item(5, 3), 4, None, Some(ScanAction::CheckOut)).unwrap_err();
        match err {
            AppError::InsufficientAvailability(msg) => {
                assert!(msg.contains("Only 2 of 5"));
            }
            other => panic!("expected InsufficientAvailability, got {:?}", other),
        }
    }

    #[test]
    fn check_out_without_location_goes_to_unknown() {
        let t = plan_transition(&item(1, 0), 1, None, None).unwrap();
        assert_eq!(t.new_location, "Unknown");
        let t = plan_transition(&item(1, 0), 1, Some(""), None).unwrap();
        assert_eq!(t.new_location, "Unknown");
    }

    #[test]
    fn check_in_over_request_clamps_to_what_is_out() {
        let t = plan_transition(&item(5, 2), 10, None, Some(ScanAction::CheckIn)).unwrap();
        assert_eq!(t.moved, 2);
        assert_eq!(t.new_quantity_out, 0);
        assert_eq!(t.new_status, EquipmentStatus::In);
        assert_eq!(t.new_location, "Warehouse");
    }

    #[test]
    fn partial_check_in_keeps_location_and_partial_status() {
        let t = plan_transition(&item(5, 4), 2, None, Some(ScanAction::CheckIn)).unwrap();
        assert_eq!(t.moved, 2);
        assert_eq!(t.new_quantity_out, 2);
        assert_eq!(t.new_status, EquipmentStatus::Partial);
        assert_eq!(t.new_location, "TruckA");
        assert!(!t.completed);
        assert!(t.message.contains("2 checked IN (Total out: 2/5)"));
    }

    #[test]
    fn round_trip_returns_home() {
        // Check out 2 then 1, check in 1 then 2: back to IN at the warehouse.
        let t1 = plan_transition(&item(3, 0), 2, Some("TruckA"), None).unwrap();
        let t2 = plan_transition(&item(3, t1.new_quantity_out), 1, Some("TruckA"), None).unwrap();
        assert_eq!(t2.new_status, EquipmentStatus::Out);

        let t3 =
            plan_transition(&item(3, t2.new_quantity_out), 1, None, Some(ScanAction::CheckIn))
                .unwrap();
        let t4 =
            plan_transition(&item(3, t3.new_quantity_out), 2, None, Some(ScanAction::CheckIn))
                .unwrap();
        assert_eq!(t4.new_quantity_out, 0);
        assert_eq!(t4.new_status, EquipmentStatus::In);
        assert_eq!(t4.new_location, "Warehouse");
        assert!(t4.message.contains("ALL 3 checked IN"));
    }

    #[test]
    fn direction_inferred_from_status() {
        // IN -> check out
        let t = plan_transition(&item(2, 0), 1, None, None).unwrap();
        assert_eq!(t.action, ScanAction::CheckOut);
        // OUT -> check in
        let t = plan_transition(&item(2, 2), 1, None, None).unwrap();
        assert_eq!(t.action, ScanAction::CheckIn);
        // PARTIAL with availability -> check out
        let t = plan_transition(&item(3, 1), 1, None, None).unwrap();
        assert_eq!(t.action, ScanAction::CheckOut);
    }

    #[test]
    fn explicit_action_overrides_inference() {
        let t = plan_transition(&item(3, 1), 1, None, Some(ScanAction::CheckIn)).unwrap();
        assert_eq!(t.action, ScanAction::CheckIn);
        assert_eq!(t.new_quantity_out, 0);
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let err = plan_transition(&item(3, 0), -1, None, None).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn zero_quantity_passes_through_without_breaking_invariant() {
        let t = plan_transition(&item(3, 0), 0, None, Some(ScanAction::CheckOut)).unwrap();
        assert_eq!(t.new_quantity_out, 0);
        assert_eq!(t.new_status, EquipmentStatus::In);
        assert!(status_matches_counters(&t, 3));

        // A zero check-in on a fully OUT item must stay OUT, not PARTIAL.
        let t = plan_transition(&item(3, 3), 0, None, Some(ScanAction::CheckIn)).unwrap();
        assert_eq!(t.moved, 0);
        assert_eq!(t.new_quantity_out, 3);
        assert_eq!(t.new_status, EquipmentStatus::Out);
    }

    #[test]
    fn moved_amount_is_recorded_not_requested() {
        let t = plan_transition(&item(5, 2), 10, None, Some(ScanAction::CheckIn)).unwrap();
        assert_eq!(t.moved, 2);
    }
}
