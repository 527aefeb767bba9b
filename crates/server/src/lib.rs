//! Delights by Jummy backend library.
//!
//! The binary in `main.rs` wires these modules into a running server; the
//! library form exists so the CLI can reuse the file store and the
//! integration-test crate can drive the full router in-process.
//!
//! # Modules
//!
//! - [`config`] - Environment-driven configuration
//! - [`error`] - `AppError` taxonomy, rendered as `{"error": message}` JSON
//! - [`state`] - Shared application state
//! - [`store`] - Storage port with file-backed and Supabase-backed implementations
//! - [`services`] - Admin session authority
//! - [`middleware`] - Extractors and request middleware
//! - [`routes`] - Route table and handlers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
