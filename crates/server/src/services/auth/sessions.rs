//! Admin session stores.
//!
//! Two interchangeable ways of answering "is this token currently valid":
//!
//! - [`MemorySessions`] - tokens live in an in-process set; restarting the
//!   server logs every admin out
//! - [`SignedSessions`] - tokens are signed assertions with a fixed expiry;
//!   they survive restarts and need no server-side state

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock};

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AuthError;

/// How long a signed admin token stays valid.
const SIGNED_TOKEN_LIFETIME_DAYS: i64 = 7;

/// The role asserted by a signed admin token.
const ADMIN_ROLE: &str = "admin";

/// Session store for admin tokens.
pub enum Sessions {
    Memory(MemorySessions),
    Signed(SignedSessions),
}

impl Sessions {
    /// Mint a new valid token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Token` if a signed token cannot be produced.
    pub fn issue(&self) -> Result<String, AuthError> {
        match self {
            Self::Memory(store) => Ok(store.issue()),
            Self::Signed(store) => store.issue(),
        }
    }

    /// Whether the token is currently valid.
    #[must_use]
    pub fn is_valid(&self, token: &str) -> bool {
        match self {
            Self::Memory(store) => store.is_valid(token),
            Self::Signed(store) => store.is_valid(token),
        }
    }

    /// Invalidate a token.
    ///
    /// A no-op for signed tokens: a signed assertion stays valid until its
    /// expiry, there is no server-side state to remove.
    pub fn revoke(&self, token: &str) {
        match self {
            Self::Memory(store) => store.revoke(token),
            Self::Signed(_) => {}
        }
    }
}

/// Process-lifetime token set.
#[derive(Default)]
pub struct MemorySessions {
    tokens: RwLock<HashSet<String>>,
}

impl MemorySessions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn issue(&self) -> String {
        let token = format!("adm_{}", Uuid::new_v4());
        self.tokens
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.clone());
        token
    }

    fn is_valid(&self, token: &str) -> bool {
        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(token)
    }

    fn revoke(&self, token: &str) {
        self.tokens
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(token);
    }
}

/// Claims carried by a signed admin token.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    role: String,
    exp: i64,
    iat: i64,
}

/// Stateless signed-assertion session store (HS256).
pub struct SignedSessions {
    secret: SecretString,
}

impl SignedSessions {
    #[must_use]
    pub const fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    fn issue(&self) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            role: ADMIN_ROLE.to_owned(),
            exp: (now + Duration::days(SIGNED_TOKEN_LIFETIME_DAYS)).timestamp(),
            iat: now.timestamp(),
        };
        let key = EncodingKey::from_secret(self.secret.expose_secret().as_bytes());
        Ok(encode(&Header::default(), &claims, &key)?)
    }

    fn is_valid(&self, token: &str) -> bool {
        let key = DecodingKey::from_secret(self.secret.expose_secret().as_bytes());
        decode::<Claims>(token, &key, &Validation::default())
            .is_ok_and(|data| data.claims.role == ADMIN_ROLE)
    }
}
