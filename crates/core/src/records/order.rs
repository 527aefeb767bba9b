//! Order record.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::clip;
use crate::types::{OrderId, OrderStatus, Phone};

/// A line captured in an order at checkout time.
///
/// This is a snapshot of the cart line, not a reference into the menu:
/// later edits to the menu item never alter an order that has already been
/// placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub qty: u32,
}

impl OrderItem {
    /// Maximum stored length of the snapshotted menu item id.
    pub const MAX_ID: usize = 80;

    /// Maximum stored length of the snapshotted item name.
    pub const MAX_NAME: usize = 120;

    /// Capture a cart line, clipping free-form fields to their caps.
    #[must_use]
    pub fn snapshot(id: &str, name: &str, price: Decimal, qty: u32) -> Self {
        Self {
            id: clip(id, Self::MAX_ID),
            name: clip(name, Self::MAX_NAME),
            price,
            qty,
        }
    }

    /// The line subtotal, qty x price.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        Decimal::from(self.qty) * self.price
    }
}

/// Customer details attached to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub phone: Phone,
    pub address: String,
}

impl Customer {
    /// Maximum stored length of the customer name.
    pub const MAX_NAME: usize = 120;

    /// Maximum stored length of the delivery address.
    pub const MAX_ADDRESS: usize = 200;

    /// Build customer details from validated parts, trimming and clipping
    /// the free-form fields.
    #[must_use]
    pub fn new(name: &str, phone: Phone, address: &str) -> Self {
        Self {
            name: clip(name.trim(), Self::MAX_NAME),
            phone,
            address: clip(address.trim(), Self::MAX_ADDRESS),
        }
    }
}

/// A placed order.
///
/// `created_at` and `total` are set once at creation. `total` is stored,
/// not recomputed on read, so it always reflects the prices the customer
/// saw at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub status: OrderStatus,
    pub customer: Customer,
    pub items: Vec<OrderItem>,
    pub total: Decimal,
}

impl Order {
    /// Sum of line subtotals over `items`.
    #[must_use]
    pub fn total_of(items: &[OrderItem]) -> Decimal {
        items.iter().map(OrderItem::subtotal).sum()
    }
}
