//! Admin authentication errors.

use thiserror::Error;

/// Errors from the admin session authority.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The supplied password did not match.
    #[error("Invalid password")]
    InvalidPassword,

    /// A signed token could not be produced.
    #[error("token signing failed: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}
