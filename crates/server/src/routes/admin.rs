//! Admin login route.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::Result;
use crate::middleware::Payload;
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub password: String,
}

/// Login response body.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// POST /api/admin/login
///
/// Mints a token on a matching password (or unconditionally in bypass
/// mode); 401 `{"error":"Invalid password"}` otherwise.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    Payload(body): Payload<LoginRequest>,
) -> Result<Json<TokenResponse>> {
    let token = state.auth().login(&body.password)?;
    tracing::info!("admin login succeeded");
    Ok(Json(TokenResponse { token }))
}
