//! HTTP routes.
//!
//! # Route Structure
//!
//! ```text
//! GET    /api/health             - Diagnostics (name, version, backing, auth mode)
//! POST   /api/admin/login        - Mint an admin token
//!
//! # Menu
//! GET    /api/menu               - Public menu listing
//! POST   /api/menu               - Create menu item            (admin)
//! PUT    /api/menu/:id           - Update menu item            (admin)
//! DELETE /api/menu/:id           - Delete menu item            (admin)
//!
//! # Orders
//! POST   /api/orders             - Public checkout
//! GET    /api/orders             - Order listing               (admin)
//! PUT    /api/orders/:id/status  - Change order status         (admin)
//! DELETE /api/orders/:id         - Delete order                (admin)
//!
//! # Contact
//! POST   /api/contact            - Public contact form
//! GET    /api/contact            - Message listing, newest first (admin)
//!
//! # Site
//! GET    /admin, /isadmin, /isadmin.html - Redirect to /admin.html
//! GET    *                       - Static site with index.html fallback
//! ```

pub mod admin;
pub mod contact;
pub mod health;
pub mod menu;
pub mod orders;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderName, Method, header},
    response::Redirect,
    routing::{delete, get, post, put},
};
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::middleware;
use crate::state::AppState;

/// JSON body size cap, matching the original deployment.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Body for delete/contact acknowledgements.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub ok: bool,
}

impl Ack {
    pub(crate) const fn ok() -> Self {
        Self { ok: true }
    }
}

/// Create the API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/admin/login", post(admin::login))
        .route("/menu", get(menu::list).post(menu::create))
        .route("/menu/{id}", put(menu::update).delete(menu::remove))
        .route("/orders", post(orders::create).get(orders::list))
        .route("/orders/{id}/status", put(orders::set_status))
        .route("/orders/{id}", delete(orders::remove))
        .route("/contact", post(contact::create).get(contact::list))
}

/// Create the full application router: API, admin redirect shortcuts, and
/// the static site with an SPA-style index fallback.
pub fn app(state: AppState) -> Router {
    let static_dir = &state.config().static_dir;
    let site = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .nest("/api", api_routes())
        // Admin shortcuts / common typos
        .route("/admin", get(admin_entry))
        .route("/isadmin", get(admin_entry))
        .route("/isadmin.html", get(admin_entry))
        .fallback_service(site)
        .layer(axum::middleware::from_fn(
            middleware::no_store_admin_assets,
        ))
        .layer(cors_layer())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn admin_entry() -> Redirect {
    Redirect::to("/admin.html")
}

/// Permissive CORS: the static site may be hosted on a different origin than
/// the API, and the admin panel sends the custom token header.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-admin-token"),
        ])
}
