//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the server runs out of the box against the
//! local JSON files with admin auth in bypass mode (and says so loudly).
//!
//! - `HOST` - Bind address (default: 127.0.0.1)
//! - `PORT` - Listen port (default: 3000)
//! - `DATA_DIR` - Directory holding the JSON collection files (default: data)
//! - `STATIC_DIR` - Directory holding the prebuilt static site (default: site)
//! - `ADMIN_PASSWORD` - Admin panel password; unset or empty enables bypass mode
//! - `ADMIN_JWT_SECRET` - When set, admin tokens are signed assertions that
//!   survive restarts; otherwise tokens live in an in-memory set
//! - `ALLOW_ANY_PASSWORD` - Set to `1` to accept any login (development only)
//! - `SUPABASE_URL` - Supabase project URL; switches storage to the hosted
//!   table API
//! - `SUPABASE_SERVICE_ROLE_KEY` / `SUPABASE_ANON_KEY` - Supabase API key
//!   (service role preferred)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory holding the JSON collection files (file-backed store)
    pub data_dir: PathBuf,
    /// Directory holding the prebuilt static site
    pub static_dir: PathBuf,
    /// Admin panel password; `None` enables bypass mode
    pub admin_password: Option<SecretString>,
    /// Signing secret for the signed-token session variant
    pub admin_jwt_secret: Option<SecretString>,
    /// Accept any login password (development only)
    pub allow_any_password: bool,
    /// Hosted table API configuration; `None` selects the file store
    pub supabase: Option<SupabaseConfig>,
}

/// Supabase REST backing configuration.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project URL, e.g. `https://xyzcompany.supabase.co`
    pub url: String,
    /// API key sent as both `apikey` and bearer token
    pub key: SecretString,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `HOST` or `PORT` fail to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("PORT".to_string(), e.to_string()))?;

        Ok(Self {
            host,
            port,
            data_dir: PathBuf::from(get_env_or_default("DATA_DIR", "data")),
            static_dir: PathBuf::from(get_env_or_default("STATIC_DIR", "site")),
            admin_password: get_optional_secret("ADMIN_PASSWORD"),
            admin_jwt_secret: get_optional_secret("ADMIN_JWT_SECRET"),
            allow_any_password: std::env::var("ALLOW_ANY_PASSWORD").as_deref() == Ok("1"),
            supabase: SupabaseConfig::from_env(),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl SupabaseConfig {
    fn from_env() -> Option<Self> {
        let url = get_optional_env("SUPABASE_URL")?;
        let key = get_optional_secret("SUPABASE_SERVICE_ROLE_KEY")
            .or_else(|| get_optional_secret("SUPABASE_ANON_KEY"))?;
        Some(Self {
            url: url.trim_end_matches('/').to_owned(),
            key,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable; empty values count as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Get an optional environment variable as a secret.
fn get_optional_secret(key: &str) -> Option<SecretString> {
    get_optional_env(key).map(SecretString::from)
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
