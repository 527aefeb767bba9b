//! The three persisted record kinds.
//!
//! Each record struct is the exact wire shape of the JSON API and of the
//! flat-file store: serializing a record produces what clients receive, and
//! deserializing accepts what earlier versions may have written (missing
//! optional fields, unnormalized categories).

pub mod contact;
pub mod menu;
pub mod order;

pub use contact::ContactMessage;
pub use menu::{DEFAULT_IMAGE, MenuItem};
pub use order::{Customer, Order, OrderItem};

/// Truncate a string to at most `max_chars` characters.
///
/// Free-form customer input is length-capped before persistence. Operates on
/// character boundaries, never splitting a multi-byte character.
#[must_use]
pub fn clip(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
