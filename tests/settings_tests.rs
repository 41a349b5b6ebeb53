use actix_web::{http::StatusCode, test};
use serde_json::json;

mod common;
use common::TestApp;

#[actix_web::test]
async fn test_save_setting_twice_keeps_one_row() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;
    let cookie = test_app.admin_cookie().await;

    let req = test::TestRequest::put()
        .uri("/api/admin/settings/site_title")
        .cookie(cookie.clone())
        .set_json(json!({ "value": "My Portfolio", "category": "general" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let first: serde_json::Value = test::read_body_json(resp).await;

    let req = test::TestRequest::put()
        .uri("/api/admin/settings/site_title")
        .cookie(cookie)
        .set_json(json!({ "value": "Studio", "category": "general" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let second: serde_json::Value = test::read_body_json(resp).await;

    assert_eq!(second["id"], first["id"]);
    assert_eq!(second["key"], "site_title");
    assert_eq!(second["value"], "Studio");
    assert_eq!(test_app.count_rows("site_settings").await, 1);
}

#[actix_web::test]
async fn test_save_setting_defaults() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;
    let cookie = test_app.admin_cookie().await;

    let req = test::TestRequest::put()
        .uri("/api/admin/settings/contact_email")
        .cookie(cookie.clone())
        .set_json(json!({ "value": "hello@example.com", "category": "contact" }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["type"], "text");
    assert_eq!(body["description"], "");
    assert!(body["updatedAt"].is_string());

    let req = test::TestRequest::put()
        .uri("/api/admin/settings/show_blog")
        .cookie(cookie)
        .set_json(json!({
            "value": "true",
            "category": "features",
            "type": "boolean",
            "description": "Show the blog link"
        }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["type"], "boolean");
    assert_eq!(body["description"], "Show the blog link");
}

#[actix_web::test]
async fn test_save_setting_without_value() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;
    let cookie = test_app.admin_cookie().await;

    let req = test::TestRequest::put()
        .uri("/api/admin/settings/hero_image")
        .cookie(cookie)
        .set_json(json!({ "category": "appearance" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["value"].is_null());
}

#[actix_web::test]
async fn test_save_setting_requires_category() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;
    let cookie = test_app.admin_cookie().await;

    let req = test::TestRequest::put()
        .uri("/api/admin/settings/site_title")
        .cookie(cookie)
        .set_json(json!({ "value": "My Portfolio" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid setting data");
    assert_eq!(body["errors"][0]["field"], "category");
    assert_eq!(test_app.count_rows("site_settings").await, 0);
}

#[actix_web::test]
async fn test_list_settings_sorted() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;
    let cookie = test_app.admin_cookie().await;

    for (key, category) in [
        ("twitter", "social"),
        ("site_title", "general"),
        ("github", "social"),
        ("footer_text", "general"),
    ] {
        let req = test::TestRequest::put()
            .uri(&format!("/api/admin/settings/{}", key))
            .cookie(cookie.clone())
            .set_json(json!({ "value": key, "category": category }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get()
        .uri("/api/admin/settings")
        .cookie(cookie.clone())
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let keys: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["footer_text", "site_title", "github", "twitter"]);

    let req = test::TestRequest::get()
        .uri("/api/admin/settings/social")
        .cookie(cookie.clone())
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let keys: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["github", "twitter"]);

    let req = test::TestRequest::get()
        .uri("/api/admin/settings/unknown")
        .cookie(cookie)
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn test_settings_require_admin() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::put()
        .uri("/api/admin/settings/site_title")
        .set_json(json!({ "value": "x", "category": "general" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(test_app.count_rows("site_settings").await, 0);
}
