mod common;

use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn unknown_account_is_rejected() {
    let Some(server) = common::try_server().await else {
        return;
    };
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/auth/login", server.base_url))
        .json(&json!({
            "email": "nobody@example.com",
            "password": "whatever",
        }))
        .send()
        .await
        .expect("login");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.expect("json body");
    assert_eq!(body["meta"]["status"], false);
}

#[tokio::test]
async fn missing_credentials_are_rejected() {
    let Some(server) = common::try_server().await else {
        return;
    };
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/auth/login", server.base_url))
        .json(&json!({ "email": "admin@example.com" }))
        .send()
        .await
        .expect("login");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
