mod common;

use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn admin_routes_reject_missing_token() {
    let Some(server) = common::try_server().await else {
        return;
    };
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/posts/admin", server.base_url))
        .json(&json!({ "title": "x" }))
        .send()
        .await
        .expect("request");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = resp.json().await.expect("json body");
    assert_eq!(body["meta"]["status"], false);
    // No data key on failure envelopes
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn admin_routes_reject_garbage_token() {
    let Some(server) = common::try_server().await else {
        return;
    };
    let client = reqwest::Client::new();

    let resp = client
        .delete(format!("{}/statistics/admin/1", server.base_url))
        .bearer_auth("not-a-jwt")
        .send()
        .await
        .expect("request");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn auth_check_precedes_body_validation() {
    let Some(server) = common::try_server().await else {
        return;
    };
    let client = reqwest::Client::new();

    // Body is unparseable, but the missing token must win.
    let resp = client
        .post(format!("{}/posts/admin", server.base_url))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("request");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn malformed_id_with_valid_token_is_validation_error() {
    let Some(server) = common::try_server().await else {
        return;
    };
    let client = reqwest::Client::new();

    let resp = client
        .delete(format!("{}/statistics/admin/abc", server.base_url))
        .bearer_auth(common::admin_token())
        .send()
        .await
        .expect("request");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.expect("json body");
    assert_eq!(body["meta"]["status"], false);
}
