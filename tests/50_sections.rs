mod common;

use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn hero_section_lifecycle() {
    let Some(server) = common::try_server().await else {
        return;
    };
    let client = reqwest::Client::new();
    let token = common::admin_token();

    let heading = common::unique("Selamat Datang");
    let resp = client
        .post(format!("{}/hero-sections/admin", server.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "heading": heading,
            "sub_heading": "Desa maju dan mandiri",
            "path_video": "/videos/profil.mp4",
            "banner": "/banners/desa.jpg",
        }))
        .send()
        .await
        .expect("create hero section");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = client
        .get(format!("{}/hero-sections", server.base_url))
        .send()
        .await
        .expect("list hero sections");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("json body");
    let id = body["data"]
        .as_array()
        .expect("sections array")
        .iter()
        .find(|s| s["heading"] == heading.as_str())
        .and_then(|s| s["id"].as_i64())
        .expect("hero section id");

    let resp = client
        .put(format!("{}/hero-sections/admin/{}", server.base_url, id))
        .bearer_auth(&token)
        .json(&json!({
            "heading": heading,
            "sub_heading": "Desa digital",
            "path_video": "",
            "banner": "/banners/desa-v2.jpg",
        }))
        .send()
        .await
        .expect("edit hero section");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .delete(format!("{}/hero-sections/admin/{}", server.base_url, id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("delete hero section");
    assert_eq!(resp.status(), StatusCode::OK);

    // Soft-deleted rows drop out of the public list.
    let resp = client
        .get(format!("{}/hero-sections", server.base_url))
        .send()
        .await
        .expect("list hero sections again");
    let body: Value = resp.json().await.expect("json body");
    let still_there = body["data"]
        .as_array()
        .expect("sections array")
        .iter()
        .any(|s| s["id"].as_i64() == Some(id));
    assert!(!still_there, "deleted hero section still listed");
}

#[tokio::test]
async fn keynote_requires_existing_company() {
    let Some(server) = common::try_server().await else {
        return;
    };
    let client = reqwest::Client::new();
    let token = common::admin_token();

    let resp = client
        .post(format!("{}/about-company-keynotes/admin", server.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "about_company_id": 999999999,
            "keynote": "Transparan",
            "path_image": "/icons/check.svg",
        }))
        .send()
        .await
        .expect("create keynote");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn keynote_created_under_real_company_and_listed_by_company() {
    let Some(server) = common::try_server().await else {
        return;
    };
    let client = reqwest::Client::new();
    let token = common::admin_token();

    let description = common::unique("Profil perusahaan desa");
    let resp = client
        .post(format!("{}/about-companies/admin", server.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "description": description,
            "path_image": "/images/kantor.jpg",
        }))
        .send()
        .await
        .expect("create about company");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = client
        .get(format!("{}/about-companies", server.base_url))
        .send()
        .await
        .expect("list about companies");
    let body: Value = resp.json().await.expect("json body");
    let company_id = body["data"]
        .as_array()
        .expect("companies array")
        .iter()
        .find(|c| c["description"] == description.as_str())
        .and_then(|c| c["id"].as_i64())
        .expect("company id");

    let keynote = common::unique("Pelayanan cepat");
    let resp = client
        .post(format!("{}/about-company-keynotes/admin", server.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "about_company_id": company_id,
            "keynote": keynote,
            "path_image": "",
        }))
        .send()
        .await
        .expect("create keynote");
    assert_eq!(resp.status(), StatusCode::CREATED);

    // Public lookup scoped to the parent company.
    let resp = client
        .get(format!(
            "{}/about-company-keynotes/company/{}",
            server.base_url, company_id
        ))
        .send()
        .await
        .expect("list keynotes by company");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("json body");
    let found = body["data"]
        .as_array()
        .expect("keynotes array")
        .iter()
        .any(|k| k["keynote"] == keynote.as_str());
    assert!(found, "keynote not listed under its company");
}

#[tokio::test]
async fn portfolio_detail_requires_existing_section() {
    let Some(server) = common::try_server().await else {
        return;
    };
    let client = reqwest::Client::new();
    let token = common::admin_token();

    let resp = client
        .post(format!("{}/portfolio-details/admin", server.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "portfolio_section_id": 999999999,
            "title": "Website Desa Sukamaju",
            "category": "Web",
        }))
        .send()
        .await
        .expect("create portfolio detail");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn service_detail_looked_up_by_service() {
    let Some(server) = common::try_server().await else {
        return;
    };
    let client = reqwest::Client::new();
    let token = common::admin_token();

    let service_name = common::unique("Desain Logo");
    let resp = client
        .post(format!("{}/service-sections/admin", server.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "name": service_name,
            "tagline": "Identitas desa",
            "path_icon": "/icons/logo.svg",
        }))
        .send()
        .await
        .expect("create service");
    assert_eq!(resp.status(), StatusCode::CREATED);

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

    let title = common::unique("Paket desain lengkap");
    let resp = client
        .post(format!("{}/service-details/admin", server.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "service_id": service_id,
            "path_image": "/images/logo-sample.png",
            "title": title,
            "description": "Logo, kop surat, dan stempel",
        }))
        .send()
        .await
        .expect("create service detail");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = client
        .get(format!(
            "{}/service-details/service/{}",
            server.base_url, service_id
        ))
        .send()
        .await
        .expect("fetch detail by service");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("json body");
    assert_eq!(body["data"]["title"], title.as_str());
    assert_eq!(body["data"]["service_id"].as_i64(), Some(service_id));

    // No detail rows for a service that has none.
    let resp = client
        .get(format!(
            "{}/service-details/service/{}",
            server.base_url, 999999999
        ))
        .send()
        .await
        .expect("fetch missing detail");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn section_admin_routes_reject_anonymous() {
    let Some(server) = common::try_server().await else {
        return;
    };
    let client = reqwest::Client::new();

    for path in [
        "/hero-sections/admin",
        "/about-companies/admin",
        "/about-company-keynotes/admin",
        "/faq-sections/admin",
        "/our-teams/admin",
        "/portfolio-sections/admin",
        "/portfolio-details/admin",
        "/portfolio-testimonials/admin",
        "/service-details/admin",
    ] {
        let resp = client
            .get(format!("{}{}", server.base_url, path))
            .send()
            .await
            .expect("anonymous admin request");
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "open admin route {}", path);
    }
}
