mod common;

use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn health_reports_envelope() {
    let Some(server) = common::try_server().await else {
        return;
    };

    let resp = reqwest::get(format!("{}/api/check", server.base_url))
        .await
        .expect("request health");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("json body");
    assert_eq!(body["meta"]["status"], true);
    assert_eq!(body["meta"]["message"], "OK");
}
