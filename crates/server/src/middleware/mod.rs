//! Extractors and request middleware.

pub mod auth;
pub mod cache;
pub mod payload;

pub use auth::RequireAdmin;
pub use cache::no_store_admin_assets;
pub use payload::Payload;
