//! Authentication extractor for admin routes.
//!
//! Route handlers opt into admin gating by taking a [`RequireAdmin`]
//! argument; the extractor consults the session authority before the handler
//! body runs, so an unauthorized request never reaches the store.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};

use crate::error::AppError;
use crate::state::AppState;

/// Custom header carrying the admin token.
pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Extractor that requires a valid admin token (or bypass mode).
///
/// Rejects with 401 `{"error":"Admin auth required"}`.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     _admin: RequireAdmin,
///     State(state): State<AppState>,
/// ) -> Result<Json<Vec<Order>>> {
///     Ok(Json(state.store().list_orders().await?))
/// }
/// ```
pub struct RequireAdmin;

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_token(&parts.headers);
        if state.auth().authorize(token.as_deref()) {
            Ok(Self)
        } else {
            Err(AppError::Unauthorized)
        }
    }
}

/// Pull the admin token out of the request headers.
///
/// `X-Admin-Token` is preferred; a bearer-style `Authorization` header is
/// accepted as a fallback.
#[must_use]
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = headers
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|token| !token.is_empty())
    {
        return Some(token.to_owned());
    }

    let authorization = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = authorization.split_at_checked(7)?;
    if scheme.eq_ignore_ascii_case("bearer ") {
        Some(token.trim().to_owned())
    } else {
        None
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extract_prefers_admin_token_header() {
        let mut headers = HeaderMap::new();
        headers.insert(ADMIN_TOKEN_HEADER, HeaderValue::from_static("adm_123"));
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer other"),
        );
        assert_eq!(extract_token(&headers).as_deref(), Some("adm_123"));
    }

    #[test]
    fn test_extract_bearer_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer adm_456"),
        );
        assert_eq!(extract_token(&headers).as_deref(), Some("adm_456"));

        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("bearer adm_789"),
        );
        assert_eq!(extract_token(&headers).as_deref(), Some("adm_789"));
    }

    #[test]
    fn test_extract_rejects_other_schemes_and_empty() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwYXNz"),
        );
        assert_eq!(extract_token(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert(ADMIN_TOKEN_HEADER, HeaderValue::from_static(""));
        assert_eq!(extract_token(&headers), None);

        assert_eq!(extract_token(&HeaderMap::new()), None);
    }
}
