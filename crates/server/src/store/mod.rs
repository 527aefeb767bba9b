//! Record storage port.
//!
//! A single storage interface over the three persisted collections, with two
//! interchangeable backings selected once at startup:
//!
//! - [`FileStore`] - one JSON array file per collection, loaded fully per
//!   operation and rewritten wholesale per mutation via atomic replace
//! - [`SupabaseStore`] - one REST row operation per call against the hosted
//!   table API
//!
//! The contract (generated ids, field shapes, NotFound signaling) is
//! identical in both; the router only learns which backing is active through
//! [`Store::backend`], which feeds the health diagnostics.

pub mod file;
pub mod supabase;

pub use file::FileStore;
pub use supabase::SupabaseStore;

use rust_decimal::Decimal;
use thiserror::Error;

use delights_core::{Category, ContactMessage, Customer, Email, MenuItem, Order, OrderItem, OrderStatus};

/// Which backing is active. Reported by `/api/health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    LocalJson,
    Supabase,
}

impl Backend {
    /// The diagnostic tag for this backing.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LocalJson => "local-json",
            Self::Supabase => "supabase",
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors surfaced by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with the given id.
    #[error("not found")]
    NotFound,

    /// The remote backing could not be reached.
    #[error("backend request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote backing rejected the operation; the message is surfaced
    /// to the client because it carries setup hints.
    #[error("{0}")]
    Remote(String),

    /// Local storage I/O failed.
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// A collection could not be serialized.
    #[error("storage serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Fields for a new menu item, already validated and normalized.
#[derive(Debug, Clone)]
pub struct NewMenuItem {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image: String,
    pub category: Category,
}

/// Partial update for a menu item.
///
/// `name` and `price` must always be supplied; the remaining fields keep
/// their prior value when absent.
#[derive(Debug, Clone)]
pub struct MenuItemUpdate {
    pub name: String,
    pub price: Decimal,
    /// `None` keeps the existing description.
    pub description: Option<String>,
    /// `None` keeps the existing image reference.
    pub image: Option<String>,
    /// `None` keeps the existing category.
    pub category: Option<Category>,
}

impl MenuItemUpdate {
    /// Merge this update over an existing item. The id never changes.
    pub fn apply(self, item: &mut MenuItem) {
        item.name = self.name;
        item.price = self.price;
        if let Some(description) = self.description {
            item.description = description;
        }
        if let Some(image) = self.image {
            item.image = image;
        }
        if let Some(category) = self.category {
            item.category = category;
        }
    }
}

/// A validated order ready to persist. The store assigns id and timestamp.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer: Customer,
    /// Non-empty; every entry has `qty > 0`.
    pub items: Vec<OrderItem>,
    /// Computed once by the caller from `items`.
    pub total: Decimal,
}

/// A validated contact message ready to persist.
#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub name: String,
    pub email: Email,
    pub message: String,
}

/// The storage port. Selected once at startup, injected via `AppState`.
pub enum Store {
    File(FileStore),
    Supabase(SupabaseStore),
}

impl Store {
    /// Which backing is active.
    #[must_use]
    pub const fn backend(&self) -> Backend {
        match self {
            Self::File(_) => Backend::LocalJson,
            Self::Supabase(_) => Backend::Supabase,
        }
    }

    /// List all menu items, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing fails.
    pub async fn list_menu(&self) -> Result<Vec<MenuItem>, StoreError> {
        match self {
            Self::File(s) => s.list_menu().await,
            Self::Supabase(s) => s.list_menu().await,
        }
    }

    /// Create a menu item, assigning a fresh id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing fails.
    pub async fn create_menu_item(&self, new: NewMenuItem) -> Result<MenuItem, StoreError> {
        match self {
            Self::File(s) => s.create_menu_item(new).await,
            Self::Supabase(s) => s.create_menu_item(new).await,
        }
    }

    /// Update a menu item by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no item has the given id.
    pub async fn update_menu_item(
        &self,
        id: &str,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, StoreError> {
        match self {
            Self::File(s) => s.update_menu_item(id, update).await,
            Self::Supabase(s) => s.update_menu_item(id, update).await,
        }
    }

    /// Delete a menu item by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no item has the given id.
    pub async fn delete_menu_item(&self, id: &str) -> Result<(), StoreError> {
        match self {
            Self::File(s) => s.delete_menu_item(id).await,
            Self::Supabase(s) => s.delete_menu_item(id).await,
        }
    }

    /// List all orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing fails.
    pub async fn list_orders(&self) -> Result<Vec<Order>, StoreError> {
        match self {
            Self::File(s) => s.list_orders().await,
            Self::Supabase(s) => s.list_orders().await,
        }
    }

    /// Persist a new order, assigning id and creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing fails.
    pub async fn create_order(&self, new: NewOrder) -> Result<Order, StoreError> {
        match self {
            Self::File(s) => s.create_order(new).await,
            Self::Supabase(s) => s.create_order(new).await,
        }
    }

    /// Change an order's status.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no order has the given id.
    pub async fn set_order_status(
        &self,
        id: &str,
        status: OrderStatus,
    ) -> Result<Order, StoreError> {
        match self {
            Self::File(s) => s.set_order_status(id, status).await,
            Self::Supabase(s) => s.set_order_status(id, status).await,
        }
    }

    /// Delete an order by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no order has the given id.
    pub async fn delete_order(&self, id: &str) -> Result<(), StoreError> {
        match self {
            Self::File(s) => s.delete_order(id).await,
            Self::Supabase(s) => s.delete_order(id).await,
        }
    }

    /// List contact messages, newest first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing fails.
    pub async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, StoreError> {
        match self {
            Self::File(s) => s.list_contact_messages().await,
            Self::Supabase(s) => s.list_contact_messages().await,
        }
    }

    /// Persist a contact message, assigning id and creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing fails.
    pub async fn create_contact_message(
        &self,
        new: NewContactMessage,
    ) -> Result<ContactMessage, StoreError> {
        match self {
            Self::File(s) => s.create_contact_message(new).await,
            Self::Supabase(s) => s.create_contact_message(new).await,
        }
    }
}
