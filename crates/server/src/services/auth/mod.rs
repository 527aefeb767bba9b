//! Admin session authority.
//!
//! Decides whether a request is authorized as admin and mints tokens on
//! successful login. Owns token validity; the router consults it and never
//! bypasses it.

mod error;
mod sessions;

pub use error::AuthError;
pub use sessions::{MemorySessions, Sessions, SignedSessions};

use secrecy::ExposeSecret;
use unicode_normalization::UnicodeNormalization;

use crate::config::AppConfig;

/// How logins are checked.
enum Mode {
    /// Development convenience: every login and every request is authorized.
    /// Active when no admin password is configured or the allow-any override
    /// is set.
    Bypass,
    /// Compare against the configured password, pre-normalized.
    Password { expected: String },
}

/// Admin session authority: auth mode plus session store.
pub struct AdminAuth {
    mode: Mode,
    sessions: Sessions,
}

impl AdminAuth {
    /// Build the authority from configuration.
    ///
    /// Sessions are signed assertions when `ADMIN_JWT_SECRET` is set (tokens
    /// survive restarts), an in-memory set otherwise (restart logs every
    /// admin out).
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let expected = config
            .admin_password
            .as_ref()
            .map(|secret| normalize_password(secret.expose_secret()))
            .filter(|normalized| !normalized.is_empty());

        let mode = match expected {
            Some(expected) if !config.allow_any_password => Mode::Password { expected },
            _ => Mode::Bypass,
        };

        let sessions = match &config.admin_jwt_secret {
            Some(secret) => Sessions::Signed(SignedSessions::new(secret.clone())),
            None => Sessions::Memory(MemorySessions::new()),
        };

        Self { mode, sessions }
    }

    /// Build an authority from explicit parts. Used by tests.
    #[must_use]
    pub fn with_sessions(password: Option<&str>, allow_any: bool, sessions: Sessions) -> Self {
        let expected = password
            .map(normalize_password)
            .filter(|normalized| !normalized.is_empty());
        let mode = match expected {
            Some(expected) if !allow_any => Mode::Password { expected },
            _ => Mode::Bypass,
        };
        Self { mode, sessions }
    }

    /// Whether the authority is in development bypass mode.
    #[must_use]
    pub const fn is_bypass(&self) -> bool {
        matches!(self.mode, Mode::Bypass)
    }

    /// Diagnostic flag for `/api/health`: is a password actually enforced?
    #[must_use]
    pub const fn require_admin_password(&self) -> bool {
        matches!(self.mode, Mode::Password { .. })
    }

    /// Attempt a login, minting a token on success.
    ///
    /// The comparison is ordinary string equality over normalized values,
    /// not constant-time.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidPassword` on mismatch, or
    /// `AuthError::Token` if a signed token cannot be produced.
    pub fn login(&self, raw_password: &str) -> Result<String, AuthError> {
        match &self.mode {
            Mode::Bypass => self.sessions.issue(),
            Mode::Password { expected } => {
                let provided = normalize_password(raw_password);
                if provided.is_empty() || provided != *expected {
                    return Err(AuthError::InvalidPassword);
                }
                self.sessions.issue()
            }
        }
    }

    /// Whether a request carrying `token` is authorized as admin.
    #[must_use]
    pub fn authorize(&self, token: Option<&str>) -> bool {
        if self.is_bypass() {
            return true;
        }
        token.is_some_and(|token| self.sessions.is_valid(token))
    }

    /// Invalidate a token (no-op for signed assertions).
    pub fn revoke(&self, token: &str) {
        self.sessions.revoke(token);
    }
}

/// Canonicalize a password for comparison: Unicode NFKC, then strip all
/// whitespace. Guards against trivial formatting mismatches (pasted spaces,
/// full-width characters), not a security primitive - no hashing.
#[must_use]
pub fn normalize_password(raw: &str) -> String {
    raw.nfkc().filter(|c| !c.is_whitespace()).collect()
}
