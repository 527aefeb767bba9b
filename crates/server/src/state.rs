//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::auth::AdminAuth;
use crate::store::{FileStore, Store, SupabaseStore};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The storage backing and the admin authority
/// are chosen once, here, and injected into the router; handlers never
/// re-derive them per request.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AppConfig,
    store: Store,
    auth: AdminAuth,
}

impl AppState {
    /// Create application state from pre-built parts.
    #[must_use]
    pub fn new(config: AppConfig, store: Store, auth: AdminAuth) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                auth,
            }),
        }
    }

    /// Create application state from configuration, selecting the storage
    /// backing: Supabase when configured, the local JSON files otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn from_config(config: AppConfig) -> std::io::Result<Self> {
        let store = match &config.supabase {
            Some(supabase) => Store::Supabase(SupabaseStore::new(supabase)),
            None => Store::File(FileStore::open(&config.data_dir)?),
        };
        let auth = AdminAuth::from_config(&config);
        Ok(Self::new(config, store, auth))
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Get a reference to the record store.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.inner.store
    }

    /// Get a reference to the admin session authority.
    #[must_use]
    pub fn auth(&self) -> &AdminAuth {
        &self.inner.auth
    }
}
