//! Core types for Delights by Jummy.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod email;
pub mod id;
pub mod phone;
pub mod status;

pub use category::Category;
pub use email::{Email, EmailError};
pub use id::*;
pub use phone::{Phone, PhoneError};
pub use status::OrderStatus;
