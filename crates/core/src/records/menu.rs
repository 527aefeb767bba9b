//! Menu item record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Category, MenuItemId};

/// Image reference used when a menu item is created without one.
pub const DEFAULT_IMAGE: &str = "assets/images/menu1.jpg";

/// A dish on the public menu.
///
/// Created and mutated only through the admin API; the id is generated at
/// creation and never changes. Prices are decimal so `8.50` stays `8.50`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    #[serde(default = "default_image")]
    pub image: String,
    #[serde(default)]
    pub category: Category,
}

fn default_image() -> String {
    DEFAULT_IMAGE.to_owned()
}
