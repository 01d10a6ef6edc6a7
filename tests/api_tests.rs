//! API integration tests
//!
//! These run against a live server with a fresh database.
//! Run with: cargo test -- --ignored

use chrono::{Days, Utc};
use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api";

/// ISO timestamp at the given hour, `days` days from now
fn at(days: u64, hour: u32) -> String {
    let day = Utc::now().date_naive() + Days::new(days);
    format!("{}T{:02}:00:00Z", day, hour)
}

/// Create a building -> resource type -> resource chain and return the
/// resource id
async fn seed_resource(client: &Client) -> i64 {
    let building: Value = client
        .post(format!("{}/buildings", BASE_URL))
        .json(&json!({
            "building_name": "Science Block",
            "building_number": "B2",
            "total_floors": 4
        }))
        .send()
        .await
        .expect("Failed to create building")
        .json()
        .await
        .expect("Failed to parse building");

    let resource_type: Value = client
        .post(format!("{}/resource-types", BASE_URL))
        .json(&json!({ "type_name": "Lab" }))
        .send()
        .await
        .expect("Failed to create resource type")
        .json()
        .await
        .expect("Failed to parse resource type");

    let resource: Value = client
        .post(format!("{}/resources", BASE_URL))
        .json(&json!({
            "resource_name": "Chemistry Lab 1",
            "resource_type_id": resource_type["id"],
            "building_id": building["id"],
            "floor_number": 2,
            "description": "Wet lab with fume hoods"
        }))
        .send()
        .await
        .expect("Failed to create resource")
        .json()
        .await
        .expect("Failed to parse resource");

    resource["id"].as_i64().expect("No resource ID")
}

/// Register a user with a unique email and return the user id
async fn seed_user(client: &Client, tag: &str) -> i64 {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    let user: Value = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&json!({
            "name": format!("Test {}", tag),
            "email": format!("{}-{}@example.org", tag, nanos),
            "password": "secret123",
            "role": "staff"
        }))
        .send()
        .await
        .expect("Failed to register user")
        .json()
        .await
        .expect("Failed to parse user");

    user["id"].as_i64().expect("No user ID")
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get("http://localhost:8080/health")
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_register_and_login() {
    let client = Client::new();
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    let email = format!("login-{}@example.org", nanos);

    let response = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&json!({
            "name": "Login Test",
            "email": email,
            "password": "secret123"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    // defaulted and uppercased, and the hash never serializes
    assert_eq!(body["role"], "STUDENT");
    assert!(body.get("password_hash").is_none());

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({ "email": email, "password": "secret123" }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({ "email": email, "password": "wrong" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_register_duplicate_email() {
    let client = Client::new();
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    let email = format!("dup-{}@example.org", nanos);
    let payload = json!({
        "name": "Dup Test",
        "email": email,
        "password": "secret123"
    });

    let response = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_building_crud() {
    let client = Client::new();

    let response = client
        .post(format!("{}/buildings", BASE_URL))
        .json(&json!({
            "building_name": "Main Hall",
            "building_number": "A1",
            "total_floors": 3
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let id = body["id"].as_i64().expect("No building ID");

    let response = client
        .get(format!("{}/buildings/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .delete(format!("{}/buildings/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    let response = client
        .get(format!("{}/buildings/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_booking_round_trip() {
    let client = Client::new();
    let resource_id = seed_resource(&client).await;
    let user_id = seed_user(&client, "round-trip").await;

    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .json(&json!({
            "user_id": user_id,
            "resource_id": resource_id,
            "start_datetime": at(1, 10),
            "end_datetime": at(1, 11)
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let created: Value = response.json().await.expect("Failed to parse response");
    let id = created["id"].as_i64().expect("No booking ID");

    let response = client
        .get(format!("{}/bookings/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let fetched: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(fetched["status"], "PENDING");
    assert!(fetched["approver_id"].is_null());
    assert_eq!(fetched["start_datetime"], created["start_datetime"]);
    assert_eq!(fetched["end_datetime"], created["end_datetime"]);
}

#[tokio::test]
#[ignore]
async fn test_booking_invalid_windows() {
    let client = Client::new();
    let resource_id = seed_resource(&client).await;
    let user_id = seed_user(&client, "invalid-window").await;

    // inverted
    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .json(&json!({
            "user_id": user_id,
            "resource_id": resource_id,
            "start_datetime": at(1, 11),
            "end_datetime": at(1, 10)
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 500);

    // empty
    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .json(&json!({
            "user_id": user_id,
            "resource_id": resource_id,
            "start_datetime": at(1, 10),
            "end_datetime": at(1, 10)
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 500);

    // in the past: yesterday
    let yesterday = Utc::now().date_naive() - Days::new(1);
    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .json(&json!({
            "user_id": user_id,
            "resource_id": resource_id,
            "start_datetime": format!("{}T10:00:00Z", yesterday),
            "end_datetime": format!("{}T11:00:00Z", yesterday)
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "PastBooking");
}

#[tokio::test]
#[ignore]
async fn test_booking_conflict_scenario() {
    let client = Client::new();
    let resource_id = seed_resource(&client).await;
    let requester = seed_user(&client, "requester").await;
    let approver = seed_user(&client, "approver").await;

    // book 10:00-11:00 and approve it
    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .json(&json!({
            "user_id": requester,
            "resource_id": resource_id,
            "start_datetime": at(2, 10),
            "end_datetime": at(2, 11)
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let booking: Value = response.json().await.expect("Failed to parse response");
    let booking_id = booking["id"].as_i64().expect("No booking ID");

    let response = client
        .put(format!("{}/bookings/{}/status", BASE_URL, booking_id))
        .json(&json!({ "status": "APPROVED", "approverId": approver }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let updated: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(updated["status"], "APPROVED");
    assert_eq!(updated["approver_id"].as_i64(), Some(approver));

    // contained window 10:30-10:45 is rejected
    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .json(&json!({
            "user_id": requester,
            "resource_id": resource_id,
            "start_datetime": format!("{}T10:30:00Z", Utc::now().date_naive() + Days::new(2)),
            "end_datetime": format!("{}T10:45:00Z", Utc::now().date_naive() + Days::new(2))
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "SlotConflict");

    // touching window 11:00-12:00 is accepted
    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .json(&json!({
            "user_id": requester,
            "resource_id": resource_id,
            "start_datetime": at(2, 11),
            "end_datetime": at(2, 12)
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    // touching window 09:00-10:00 is accepted
    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .json(&json!({
            "user_id": requester,
            "resource_id": resource_id,
            "start_datetime": at(2, 9),
            "end_datetime": at(2, 10)
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
}

#[tokio::test]
#[ignore]
async fn test_pending_booking_does_not_block() {
    let client = Client::new();
    let resource_id = seed_resource(&client).await;
    let user_id = seed_user(&client, "pending-block").await;

    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .json(&json!({
            "user_id": user_id,
            "resource_id": resource_id,
            "start_datetime": at(3, 10),
            "end_datetime": at(3, 11)
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    // the first booking is still PENDING, so an overlapping request passes
    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .json(&json!({
            "user_id": user_id,
            "resource_id": resource_id,
            "start_datetime": at(3, 10),
            "end_datetime": at(3, 11)
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
}

#[tokio::test]
#[ignore]
async fn test_update_status_rejects_invalid_status() {
    let client = Client::new();
    let resource_id = seed_resource(&client).await;
    let user_id = seed_user(&client, "bad-status").await;

    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .json(&json!({
            "user_id": user_id,
            "resource_id": resource_id,
            "start_datetime": at(4, 10),
            "end_datetime": at(4, 11)
        }))
        .send()
        .await
        .expect("Failed to send request");
    let booking: Value = response.json().await.expect("Failed to parse response");
    let booking_id = booking["id"].as_i64().expect("No booking ID");

    let response = client
        .put(format!("{}/bookings/{}/status", BASE_URL, booking_id))
        .json(&json!({ "status": "CANCELLED", "approverId": user_id }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 500);

    // stored booking is untouched
    let response = client
        .get(format!("{}/bookings/{}", BASE_URL, booking_id))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "PENDING");
}

#[tokio::test]
#[ignore]
async fn test_delete_booking() {
    let client = Client::new();
    let resource_id = seed_resource(&client).await;
    let user_id = seed_user(&client, "delete").await;

    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .json(&json!({
            "user_id": user_id,
            "resource_id": resource_id,
            "start_datetime": at(5, 10),
            "end_datetime": at(5, 11)
        }))
        .send()
        .await
        .expect("Failed to send request");
    let booking: Value = response.json().await.expect("Failed to parse response");
    let booking_id = booking["id"].as_i64().expect("No booking ID");

    let response = client
        .delete(format!("{}/bookings/{}", BASE_URL, booking_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!(true));

    // deleting again reports false with 500
    let response = client
        .delete(format!("{}/bookings/{}", BASE_URL, booking_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!(false));
}

#[tokio::test]
#[ignore]
async fn test_booking_with_unknown_user() {
    let client = Client::new();
    let resource_id = seed_resource(&client).await;

    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .json(&json!({
            "user_id": 999_999_999,
            "resource_id": resource_id,
            "start_datetime": at(6, 10),
            "end_datetime": at(6, 11)
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "ReferenceNotFound");
}
