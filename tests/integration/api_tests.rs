//! API integration tests

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Helper to create a record and return its id
async fn create_tourist(client: &Client, code: &str) -> String {
    let response = client
        .post(format!("{}/tourists", BASE_URL))
        .json(&json!({
            "touristName": "Test Tourist",
            "touristEmail": "tourist@example.com",
            "touristPhone": "+90 555 000 0000",
            "touristCode": code,
            "country": "Turkey",
            "countryId": "TR",
            "city": "Antalya",
            "otel": "Grand Resort",
            "date": "2026-07-14",
            "cost": 1250.0
        }))
        .send()
        .await
        .expect("Failed to send create request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse create response");
    body["tourist"]["id"]
        .as_str()
        .expect("No tourist id in response")
        .to_string()
}

async fn delete_tourist(client: &Client, id: &str) {
    let _ = client
        .delete(format!("{}/tourists/{}", BASE_URL, id))
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
async fn test_create_forces_empty_gallery() {
    let client = Client::new();

    // A pre-seeded gallery must be discarded at creation
    let response = client
        .post(format!("{}/tourists", BASE_URL))
        .json(&json!({
            "touristName": "Test Tourist",
            "touristEmail": "tourist@example.com",
            "touristPhone": "+90 555 000 0000",
            "touristCode": "1234",
            "images": ["uploads/images/sneaky.png"]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["tourist"]["images"], json!([]));

    let id = body["tourist"]["id"].as_str().expect("No tourist id");
    delete_tourist(&client, id).await;
}

#[tokio::test]
#[ignore]
async fn test_get_includes_code_list_excludes_it() {
    let client = Client::new();
    let id = create_tourist(&client, "1234").await;

    let response = client
        .get(format!("{}/tourists/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["tourist"]["touristCode"], "1234");

    let response = client
        .get(format!("{}/tourists", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let tourists = body["tourists"].as_array().expect("tourists is not an array");
    assert!(!tourists.is_empty());
    for tourist in tourists {
        assert!(tourist.get("touristCode").is_none());
    }

    delete_tourist(&client, &id).await;
}

#[tokio::test]
#[ignore]
async fn test_get_unknown_id_is_404() {
    let client = Client::new();

    let response = client
        .get(format!("{}/tourists/65a1b2c3d4e5f6a7b8c9d0e1", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_update_destination_fields() {
    let client = Client::new();
    let id = create_tourist(&client, "1234").await;

    let response = client
        .patch(format!("{}/tourists/{}", BASE_URL, id))
        .json(&json!({
            "country": "Greece",
            "countryId": "GR",
            "city": "Santorini",
            "otel": "Caldera View",
            "date": "2026-09-01",
            "cost": 1890.0
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["tourist"]["city"], "Santorini");
    assert_eq!(body["tourist"]["cost"], 1890.0);
    // Identity fields stay untouched
    assert_eq!(body["tourist"]["touristName"], "Test Tourist");

    delete_tourist(&client, &id).await;
}

#[tokio::test]
#[ignore]
async fn test_comment_update_is_code_gated() {
    let client = Client::new();
    let id = create_tourist(&client, "1234").await;

    // Wrong code: rejected, record unchanged
    let response = client
        .patch(format!("{}/tourists/{}/comment", BASE_URL, id))
        .json(&json!({
            "comment": "Great stay",
            "touristCode": "0000"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);

    let response = client
        .get(format!("{}/tourists/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["tourist"].get("comment").is_none());

    // Correct code: comment lands
    let response = client
        .patch(format!("{}/tourists/{}/comment", BASE_URL, id))
        .json(&json!({
            "comment": "Great stay",
            "touristCode": "1234"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["tourist"]["comment"], "Great stay");

    delete_tourist(&client, &id).await;
}

#[tokio::test]
#[ignore]
async fn test_gallery_update_is_a_full_replace() {
    let client = Client::new();
    let id = create_tourist(&client, "1234").await;

    let response = client
        .patch(format!("{}/tourists/gallery", BASE_URL))
        .json(&json!({
            "touristInfo": {
                "id": id,
                "images": ["uploads/images/a.png", "uploads/images/b.png"]
            }
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    // Replacing again does not append
    let response = client
        .patch(format!("{}/tourists/gallery", BASE_URL))
        .json(&json!({
            "touristInfo": {
                "id": id,
                "images": ["uploads/images/c.png"]
            }
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["tourist"]["images"], json!(["uploads/images/c.png"]));

    delete_tourist(&client, &id).await;
}

#[tokio::test]
#[ignore]
async fn test_delete_is_idempotent() {
    let client = Client::new();
    let id = create_tourist(&client, "1234").await;

    let response = client
        .delete(format!("{}/tourists/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    // Deleting the same id again still succeeds
    let response = client
        .delete(format!("{}/tourists/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Deleted tourist.");
}

#[tokio::test]
#[ignore]
async fn test_upload_accepts_png() {
    let client = Client::new();

    let part = reqwest::multipart::Part::bytes(b"\x89PNG\r\n".to_vec())
        .file_name("holiday.png")
        .mime_str("image/png")
        .expect("Invalid mime");
    let form = reqwest::multipart::Form::new().part("image", part);

    let response = client
        .post(format!("{}/tourists/upload", BASE_URL))
        .multipart(form)
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "data received");
    let path = body["data"]["path"].as_str().expect("No stored path");
    assert!(path.ends_with(".png"));

    // Cleanup through the discard endpoint
    let response = client
        .delete(format!("{}/tourists/upload", BASE_URL))
        .json(&json!({ "image": path }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_upload_rejects_gif() {
    let client = Client::new();

    let part = reqwest::multipart::Part::bytes(b"GIF89a".to_vec())
        .file_name("clip.gif")
        .mime_str("image/gif")
        .expect("Invalid mime");
    let form = reqwest::multipart::Form::new().part("image", part);

    let response = client
        .post(format!("{}/tourists/upload", BASE_URL))
        .multipart(form)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);
}

#[tokio::test]
#[ignore]
async fn test_discard_always_acknowledges() {
    let client = Client::new();

    let response = client
        .delete(format!("{}/tourists/upload", BASE_URL))
        .json(&json!({ "image": "uploads/images/never-existed.png" }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Deleted image.");
}
