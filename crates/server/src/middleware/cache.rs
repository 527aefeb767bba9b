//! Cache-control middleware for admin assets.

use axum::{
    extract::Request,
    http::{HeaderValue, header},
    middleware::Next,
    response::Response,
};

/// Prevent stale admin assets from being cached.
///
/// The admin panel ships as static files next to the public site; browsers
/// holding an old `admin.js` would talk to the API with stale payloads.
pub async fn no_store_admin_assets(req: Request, next: Next) -> Response {
    let no_store = matches!(req.uri().path(), "/admin.html" | "/admin.js");
    let mut response = next.run(req).await;
    if no_store {
        response
            .headers_mut()
            .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    }
    response
}
