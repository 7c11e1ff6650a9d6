mod common;

use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn appointment_requires_existing_service() {
    let Some(server) = common::try_server().await else {
        return;
    };
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/appointments", server.base_url))
        .json(&json!({
            "service_id": 999999999,
            "name": "Budi",
            "email": "budi@example.com",
            "phone_number": "0812000111",
            "brief": "Website profil desa",
            "budget": 5000000,
            "meet_at": "2024-02-01",
        }))
        .send()
        .await
        .expect("create appointment");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn appointment_booked_against_real_service() {
    let Some(server) = common::try_server().await else {
        return;
    };
    let client = reqwest::Client::new();
    let token = common::admin_token();

    let service_name = common::unique("Pembuatan Website");
    let resp = client
        .post(format!("{}/service-sections/admin", server.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "name": service_name,
            "tagline": "Cepat dan rapi",
            "path_icon": "/icons/web.svg",
        }))
        .send()
        .await
        .expect("create service");
    assert_eq!(resp.status(), StatusCode::CREATED);

    // Look the section up through the public list to learn its id.
    let resp = client
        .get(format!("{}/service-sections", server.base_url))
        .send()
        .await
        .expect("list services");
    let body: Value = resp.json().await.expect("json body");
    let service_id = body["data"]
        .as_array()
        .expect("services array")
        .iter()
        .find(|s| s["name"] == service_name.as_str())
        .and_then(|s| s["id"].as_i64())
        .expect("service id");

    let resp = client
        .post(format!("{}/appointments", server.base_url))
        .json(&json!({
            "service_id": service_id,
            "name": "Siti",
            "email": "siti@example.com",
            "phone_number": "0812000222",
            "brief": "Konsultasi profil desa",
            "budget": 2500000,
            "meet_at": "2024-02-01",
        }))
        .send()
        .await
        .expect("create appointment");
    assert_eq!(resp.status(), StatusCode::CREATED);

    // Reads are admin-only and carry the joined service name.
    let resp = client
        .get(format!("{}/appointments/admin", server.base_url))
        .send()
        .await
        .expect("list without token");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = client
        .get(format!("{}/appointments/admin", server.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .expect("list appointments");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("json body");
    let found = body["data"]
        .as_array()
        .expect("appointments array")
        .iter()
        .any(|a| {
            a["service_id"].as_i64() == Some(service_id)
                && a["service_name"].as_str().is_some_and(|n| !n.is_empty())
                && a["meet_at"] == "01 Feb 2024 00:00:00"
        });
    assert!(found, "booked appointment not listed with joined service name");
}
