//! API integration tests

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Helper to register a fresh equipment item and return its id
async fn create_equipment(client: &Client, name: &str, quantity: i32) -> String {
    let response = client
        .post(format!("{}/equipment", BASE_URL))
        .json(&json!({ "name": name, "quantity": quantity }))
        .send()
        .await
        .expect("Failed to create equipment");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_str().expect("No equipment id").to_string()
}

async fn delete_equipment(client: &Client, id: &str) {
    let _ = client
        .delete(format!("{}/equipment/{}", BASE_URL, id))
        .send()
        .await;
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_create_equipment_starts_in_warehouse() {
    let client = Client::new();
    let id = create_equipment(&client, "Test LED Panel", 4).await;

    let response = client
        .get(format!("{}/equipment/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "IN");
    assert_eq!(body["location"], "Warehouse");
    assert_eq!(body["quantity"], 4);
    assert_eq!(body["quantity_out"], 0);
    assert_eq!(body["quantity_available"], 4);

    delete_equipment(&client, &id).await;
}

#[tokio::test]
#[ignore]
async fn test_scan_unknown_code_is_404() {
    let client = Client::new();

    let response = client
        .post(format!("{}/scan", BASE_URL))
        .json(&json!({ "code": "EQ0000000000000" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_partial_then_full_check_out_and_round_trip() {
    let client = Client::new();
    let id = create_equipment(&client, "Test Mixer", 3).await;

    // Check out 2 of 3 to TruckA
    let response = client
        .post(format!("{}/scan", BASE_URL))
        .json(&json!({ "code": id, "quantity": 2, "location": "TruckA" }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("2 checked OUT (Total out: 2/3)"));
    assert_eq!(body["equipment"]["status"], "PARTIAL");
    assert_eq!(body["equipment"]["quantity_out"], 2);
    assert_eq!(body["equipment"]["location"], "TruckA");

    // Check out the last unit with an explicit action
    let response = client
        .post(format!("{}/scan", BASE_URL))
        .json(&json!({
            "code": id, "quantity": 1, "location": "TruckA", "action": "CHECK_OUT"
        }))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].as_str().unwrap().contains("ALL 3 checked OUT"));
    assert_eq!(body["equipment"]["status"], "OUT");
    assert_eq!(body["equipment"]["quantity_available"], 0);

    // Bring everything back: an over-request clamps and lands at IN
    let response = client
        .post(format!("{}/scan", BASE_URL))
        .json(&json!({ "code": id, "quantity": 10, "action": "CHECK_IN" }))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["equipment"]["status"], "IN");
    assert_eq!(body["equipment"]["quantity_out"], 0);
    assert_eq!(body["equipment"]["location"], "Warehouse");

    delete_equipment(&client, &id).await;
}

#[tokio::test]
#[ignore]
async fn test_check_out_beyond_available_is_rejected() {
    let client = Client::new();
    let id = create_equipment(&client, "Test Cable Drum", 2).await;

    let response = client
        .post(format!("{}/scan", BASE_URL))
        .json(&json!({ "code": id, "quantity": 5 }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);

    // State untouched
    let response = client
        .get(format!("{}/equipment/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "IN");
    assert_eq!(body["quantity_out"], 0);

    delete_equipment(&client, &id).await;
}

#[tokio::test]
#[ignore]
async fn test_scan_appends_history_with_moved_quantity() {
    let client = Client::new();
    let id = create_equipment(&client, "Test Follow Spot", 1).await;

    let response = client
        .post(format!("{}/scan", BASE_URL))
        .json(&json!({ "code": id, "location": "Stage", "scanned_by": "alex" }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/history?equipment_id={}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["total"], 1);
    let entry = &body["entries"][0];
    assert_eq!(entry["action"], "CHECK_OUT");
    assert_eq!(entry["location"], "Stage");
    assert_eq!(entry["scanned_by"], "alex");
    assert_eq!(entry["note"], "Quantity: 1");

    delete_equipment(&client, &id).await;
}

#[tokio::test]
#[ignore]
async fn test_scan_auto_enrolls_event_checklist() {
    let client = Client::new();
    let id = create_equipment(&client, "Test Hazer", 1).await;

    let response = client
        .post(format!("{}/events", BASE_URL))
        .json(&json!({
            "name": "Test Launch Party",
            "event_type": "corporate",
            "event_date": "2026-09-01"
        }))
        .send()
        .await
        .expect("Failed to create event");
    assert_eq!(response.status(), 201);
    let event: Value = response.json().await.expect("Failed to parse response");
    let event_id = event["id"].as_str().unwrap().to_string();

    // Scan against the event without adding the equipment first
    let response = client
        .post(format!("{}/scan", BASE_URL))
        .json(&json!({ "code": id, "event_id": event_id, "location": "Venue" }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/events/{}", BASE_URL, event_id))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    let checklist = body["checklist"].as_array().unwrap();
    let entry = checklist
        .iter()
        .find(|e| e["equipment_id"] == id.as_str())
        .expect("Equipment was not auto-enrolled");
    assert_eq!(entry["checked_out"], true);
    assert_eq!(entry["checked_in"], false);

    let _ = client
        .delete(format!("{}/events/{}", BASE_URL, event_id))
        .send()
        .await;
    delete_equipment(&client, &id).await;
}

#[tokio::test]
#[ignore]
async fn test_template_application_skips_existing_entries() {
    let client = Client::new();
    let eq1 = create_equipment(&client, "Test Truss A", 1).await;
    let eq2 = create_equipment(&client, "Test Truss B", 1).await;

    let response = client
        .post(format!("{}/templates", BASE_URL))
        .json(&json!({
            "name": "Test Rig Template",
            "items": [
                { "equipment_id": eq1 },
                { "equipment_id": eq2 }
            ]
        }))
        .send()
        .await
        .expect("Failed to create template");
    assert_eq!(response.status(), 201);
    let template: Value = response.json().await.expect("Failed to parse response");
    let template_id = template["id"].as_str().unwrap().to_string();

    let response = client
        .post(format!("{}/events", BASE_URL))
        .json(&json!({
            "name": "Test Festival",
            "event_type": "concert",
            "event_date": "2026-10-01"
        }))
        .send()
        .await
        .expect("Failed to create event");
    let event: Value = response.json().await.expect("Failed to parse response");
    let event_id = event["id"].as_str().unwrap().to_string();

    // Pre-add one of the two items
    let response = client
        .post(format!("{}/events/{}/checklist", BASE_URL, event_id))
        .json(&json!({ "equipment_id": eq1 }))
        .send()
        .await
        .expect("Failed to add checklist entry");
    assert_eq!(response.status(), 201);

    // Applying the template only adds the missing item
    let response = client
        .post(format!("{}/events/{}/apply-template", BASE_URL, event_id))
        .json(&json!({ "template_id": template_id }))
        .send()
        .await
        .expect("Failed to apply template");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["added"], 1);

    let _ = client
        .delete(format!("{}/templates/{}", BASE_URL, template_id))
        .send()
        .await;
    let _ = client
        .delete(format!("{}/events/{}", BASE_URL, event_id))
        .send()
        .await;
    delete_equipment(&client, &eq1).await;
    delete_equipment(&client, &eq2).await;
}

#[tokio::test]
#[ignore]
async fn test_concurrent_check_outs_never_overcommit() {
    let client = Client::new();
    let id = create_equipment(&client, "Test Projector", 1).await;

    // Fire 5 simultaneous check-outs for the single available unit
    let requests = (0..5).map(|_| {
        let client = client.clone();
        let id = id.clone();
        async move {
            client
                .post(format!("{}/scan", BASE_URL))
                .json(&json!({ "code": id, "quantity": 1, "action": "CHECK_OUT" }))
                .send()
                .await
                .expect("Failed to send request")
                .status()
        }
    });
    let statuses = futures::future::join_all(requests).await;

    let successes = statuses.iter().filter(|s| s.is_success()).count();
    let conflicts = statuses.iter().filter(|s| s.as_u16() == 409).count();
    assert_eq!(successes, 1);
    assert_eq!(conflicts, 4);

    // Counter never exceeded the total quantity
    let response = client
        .get(format!("{}/equipment/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["quantity_out"], 1);
    assert_eq!(body["status"], "OUT");

    delete_equipment(&client, &id).await;
}

#[tokio::test]
#[ignore]
async fn test_export_import_round_trip() {
    let client = Client::new();
    let id = create_equipment(&client, "Test Smoke Machine", 2).await;

    let response = client
        .get(format!("{}/export", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let exported: Value = response.json().await.expect("Failed to parse response");
    let rows = exported.as_array().unwrap();
    assert!(rows.iter().any(|r| r["id"] == id.as_str()));

    let response = client
        .post(format!("{}/import", BASE_URL))
        .json(&json!({ "equipment": rows }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["imported"], rows.len());

    delete_equipment(&client, &id).await;
}
