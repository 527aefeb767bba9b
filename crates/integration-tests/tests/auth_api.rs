//! Admin login, token validation, and bypass-mode behavior.

mod common;

use axum::http::StatusCode;
use secrecy::SecretString;
use serde_json::json;
use tempfile::TempDir;

use common::{TEST_PASSWORD, app, app_with, login, send, test_config};

#[tokio::test]
async fn test_health_reports_backing_and_auth_mode() {
    let dir = TempDir::new().expect("tempdir");
    let app = app(dir.path());

    let (status, body) = send(&app, "GET", "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "delights-by-jummy");
    assert_eq!(body["database"], "local-json");
    assert_eq!(body["requireAdminPassword"], true);
    assert!(!body["version"].as_str().unwrap_or("").is_empty());
}

#[tokio::test]
async fn test_login_wrong_password_then_correct() {
    let dir = TempDir::new().expect("tempdir");
    let app = app(dir.path());

    let (status, body) = send(
        &app,
        "POST",
        "/api/admin/login",
        None,
        Some(json!({ "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid password");

    let token = login(&app).await;
    assert!(!token.is_empty());

    let (status, body) = send(&app, "GET", "/api/orders", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_login_tolerates_password_formatting() {
    let dir = TempDir::new().expect("tempdir");
    let app = app(dir.path());

    let (status, _) = send(
        &app,
        "POST",
        "/api/admin/login",
        None,
        Some(json!({ "password": " admin 123 " })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_admin_routes_reject_missing_or_forged_token() {
    let dir = TempDir::new().expect("tempdir");
    let app = app(dir.path());

    let gated: &[(&str, &str)] = &[
        ("GET", "/api/orders"),
        ("GET", "/api/contact"),
        ("POST", "/api/menu"),
        ("PUT", "/api/menu/item_1"),
        ("DELETE", "/api/menu/item_1"),
        ("PUT", "/api/orders/ord_1/status"),
        ("DELETE", "/api/orders/ord_1"),
    ];

    for (method, path) in gated {
        let (status, body) = send(&app, method, path, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {path}");
        assert_eq!(body["error"], "Admin auth required", "{method} {path}");

        let (status, _) = send(&app, method, path, Some("adm_forged"), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {path} forged");
    }
}

#[tokio::test]
async fn test_bearer_authorization_header_accepted() {
    let dir = TempDir::new().expect("tempdir");
    let app = app(dir.path());
    let token = login(&app).await;

    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/api/orders")
        .header("Authorization", format!("Bearer {token}"))
        .body(axum::body::Body::empty())
        .expect("request should build");
    let response = tower::ServiceExt::oneshot(app.clone(), request)
        .await
        .expect("request should run");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_bypass_mode_when_no_password_configured() {
    let dir = TempDir::new().expect("tempdir");
    let mut config = test_config(dir.path());
    config.admin_password = None;
    let app = app_with(config);

    let (_, health) = send(&app, "GET", "/api/health", None, None).await;
    assert_eq!(health["requireAdminPassword"], false);

    // Any password logs in
    let (status, body) = send(
        &app,
        "POST",
        "/api/admin/login",
        None,
        Some(json!({ "password": "whatever" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body["token"].as_str().unwrap_or("").is_empty());

    // And requests are authorized even without a token
    let (status, _) = send(&app, "GET", "/api/orders", None, None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_allow_any_password_override() {
    let dir = TempDir::new().expect("tempdir");
    let mut config = test_config(dir.path());
    config.allow_any_password = true;
    let app = app_with(config);

    let (status, _) = send(
        &app,
        "POST",
        "/api/admin/login",
        None,
        Some(json!({ "password": "definitely-not-it" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_memory_tokens_die_with_the_process() {
    let dir = TempDir::new().expect("tempdir");
    let app_before = app(dir.path());
    let token = login(&app_before).await;

    // A fresh state over the same data dir simulates a restart
    let app_after = app(dir.path());
    let (status, _) = send(&app_after, "GET", "/api/orders", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_signed_tokens_survive_restart() {
    let dir = TempDir::new().expect("tempdir");
    let mut config = test_config(dir.path());
    config.admin_jwt_secret = Some(SecretString::from("integration-signing-secret"));

    let app_before = app_with(config.clone());
    let (status, body) = send(
        &app_before,
        "POST",
        "/api/admin/login",
        None,
        Some(json!({ "password": TEST_PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().expect("token").to_owned();

    let app_after = app_with(config);
    let (status, _) = send(&app_after, "GET", "/api/orders", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_admin_shortcuts_redirect() {
    let dir = TempDir::new().expect("tempdir");
    let app = app(dir.path());

    for path in ["/admin", "/isadmin", "/isadmin.html"] {
        let request = axum::http::Request::builder()
            .method("GET")
            .uri(path)
            .body(axum::body::Body::empty())
            .expect("request should build");
        let response = tower::ServiceExt::oneshot(app.clone(), request)
            .await
            .expect("request should run");
        assert!(response.status().is_redirection(), "{path}");
        assert_eq!(
            response
                .headers()
                .get("location")
                .and_then(|v| v.to_str().ok()),
            Some("/admin.html"),
            "{path}"
        );
    }
}

#[tokio::test]
async fn test_cors_preflight() {
    let dir = TempDir::new().expect("tempdir");
    let app = app(dir.path());

    let request = axum::http::Request::builder()
        .method("OPTIONS")
        .uri("/api/menu")
        .header("Origin", "https://delightsbyjummy.com")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "x-admin-token")
        .body(axum::body::Body::empty())
        .expect("request should build");
    let response = tower::ServiceExt::oneshot(app.clone(), request)
        .await
        .expect("request should run");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
