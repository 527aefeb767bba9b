//! Delights Core - Shared types library.
//!
//! This crate provides common types used across all Delights by Jummy
//! components:
//! - `server` - Public storefront + admin JSON API
//! - `cli` - Command-line tools for data-file management and seeding
//!
//! # Architecture
//!
//! The core crate contains only types and pure normalization - no I/O, no
//! HTTP, no storage access. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for record ids, phone numbers, categories,
//!   and statuses
//! - [`records`] - The three persisted record kinds (menu items, orders,
//!   contact messages) with their wire-exact serde shapes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod records;
pub mod types;

pub use records::*;
pub use types::*;
