mod common;

use reqwest::StatusCode;
use serde_json::{json, Value};

fn post_body(title: &str, slug: &str) -> Value {
    json!({
        "title": title,
        "slug": slug,
        "author": "Pak Lurah",
        "featured_image": "/img/cover.jpg",
        "content": "Isi berita desa.",
        "published_at": "2024-01-15",
    })
}

#[tokio::test]
async fn post_lifecycle_with_derived_slug() {
    let Some(server) = common::try_server().await else {
        return;
    };
    let client = reqwest::Client::new();
    let token = common::admin_token();

    // Slug omitted: derived from the title.
    let title = common::unique("Kabar Desa Hari Ini");
    let expected_slug = title.to_lowercase().replace(' ', "-");

    let resp = client
        .post(format!("{}/posts/admin", server.base_url))
        .bearer_auth(&token)
        .json(&post_body(&title, ""))
        .send()
        .await
        .expect("create post");
    assert_eq!(resp.status(), StatusCode::CREATED);

    // Visible on the public slug route, date rendered in display format.
    let resp = client
        .get(format!("{}/posts/slug/{}", server.base_url, expected_slug))
        .send()
        .await
        .expect("fetch by slug");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("json body");
    assert_eq!(body["meta"]["status"], true);
    assert_eq!(body["data"]["slug"], expected_slug.as_str());
    assert_eq!(body["data"]["published_at"], "15 Jan 2024 00:00:00");
    let id = body["data"]["id"].as_i64().expect("post id");

    // Same slug again conflicts.
    let resp = client
        .post(format!("{}/posts/admin", server.base_url))
        .bearer_auth(&token)
        .json(&post_body("Another Title", &expected_slug))
        .send()
        .await
        .expect("create duplicate");
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // Editing a post keeping its own slug is not a conflict.
    let resp = client
        .put(format!("{}/posts/admin/{}", server.base_url, id))
        .bearer_auth(&token)
        .json(&post_body("Judul Baru", &expected_slug))
        .send()
        .await
        .expect("edit post");
    assert_eq!(resp.status(), StatusCode::OK);

    // Soft delete hides the post from every read path.
    let resp = client
        .delete(format!("{}/posts/admin/{}", server.base_url, id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("delete post");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{}/posts/{}", server.base_url, id))
        .send()
        .await
        .expect("refetch");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn editing_absent_post_is_not_found() {
    let Some(server) = common::try_server().await else {
        return;
    };
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{}/posts/admin/999999999", server.base_url))
        .bearer_auth(common::admin_token())
        .json(&post_body("Ghost", &common::unique("ghost")))
        .send()
        .await
        .expect("edit absent");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_fields_are_rejected() {
    let Some(server) = common::try_server().await else {
        return;
    };
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/posts/admin", server.base_url))
        .bearer_auth(common::admin_token())
        .json(&json!({ "title": "only a title" }))
        .send()
        .await
        .expect("create invalid");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.expect("json body");
    assert_eq!(body["meta"]["status"], false);
}

#[tokio::test]
async fn bad_date_format_is_rejected() {
    let Some(server) = common::try_server().await else {
        return;
    };
    let client = reqwest::Client::new();

    let mut body = post_body("Tanggal Salah", &common::unique("tanggal"));
    body["published_at"] = json!("15-01-2024");

    let resp = client
        .post(format!("{}/posts/admin", server.base_url))
        .bearer_auth(common::admin_token())
        .json(&body)
        .send()
        .await
        .expect("create bad date");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
