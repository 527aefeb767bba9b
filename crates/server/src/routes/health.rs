//! Health / diagnostics route.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::AppState;

/// Application name reported by diagnostics.
pub const APP_NAME: &str = "delights-by-jummy";

/// Diagnostics payload.
///
/// `database` names the active storage backing; `requireAdminPassword` is
/// false whenever bypass mode is active, so a misconfigured deployment is
/// visible at a glance.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub database: &'static str,
    pub require_admin_password: bool,
}

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        name: APP_NAME,
        version: env!("CARGO_PKG_VERSION"),
        database: state.store().backend().as_str(),
        require_admin_password: state.auth().require_admin_password(),
    })
}
