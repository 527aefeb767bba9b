//! Shared helpers for the in-process API suites.

use std::path::Path;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use secrecy::SecretString;
use serde_json::Value;
use tower::ServiceExt;

use delights_server::config::AppConfig;
use delights_server::routes;
use delights_server::state::AppState;

/// The password used by every password-mode test config.
pub const TEST_PASSWORD: &str = "admin123";

/// Config against a temporary data directory, password auth, in-memory
/// sessions, file-backed store.
#[must_use]
pub fn test_config(data_dir: &Path) -> AppConfig {
    AppConfig {
        host: "127.0.0.1".parse().expect("valid address"),
        port: 0,
        data_dir: data_dir.to_path_buf(),
        static_dir: data_dir.join("site"),
        admin_password: Some(SecretString::from(TEST_PASSWORD)),
        admin_jwt_secret: None,
        allow_any_password: false,
        supabase: None,
    }
}

/// Build the full application router for a config.
#[must_use]
pub fn app_with(config: AppConfig) -> Router {
    let state = AppState::from_config(config).expect("state should initialize");
    routes::app(state)
}

/// Build the default test app against `data_dir`.
#[must_use]
pub fn app(data_dir: &Path) -> Router {
    app_with(test_config(data_dir))
}

/// Send one request and return (status, parsed JSON body).
///
/// The body is `Value::Null` when empty or not JSON.
pub async fn send(
    app: &Router,
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header("X-Admin-Token", token);
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request should build"),
        None => builder.body(Body::empty()).expect("request should build"),
    };

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("request should not fail at the transport level");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

/// Log in with the test password and return the minted token.
pub async fn login(app: &Router) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/admin/login",
        None,
        Some(serde_json::json!({ "password": TEST_PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login should succeed: {body}");
    body["token"]
        .as_str()
        .expect("login response carries a token")
        .to_owned()
}
