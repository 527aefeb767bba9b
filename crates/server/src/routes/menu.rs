//! Menu route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use delights_core::{Category, DEFAULT_IMAGE, MenuItem};

use super::Ack;
use crate::error::{AppError, Result};
use crate::middleware::{Payload, RequireAdmin};
use crate::state::AppState;
use crate::store::{MenuItemUpdate, NewMenuItem};

/// Incoming menu item fields for create and update alike.
///
/// Every field is optional on the wire; which ones are actually required is
/// decided in validation so the client gets a field-naming message.
#[derive(Debug, Default, Deserialize)]
pub struct MenuItemPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub image: Option<String>,
    pub category: Option<String>,
}

impl MenuItemPayload {
    /// Validate the required fields shared by create and update.
    fn name_and_price(&self) -> Result<(String, Decimal)> {
        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty());
        let (Some(name), Some(price)) = (name, self.price) else {
            return Err(AppError::validation("Missing name or price"));
        };
        if price < Decimal::ZERO {
            return Err(AppError::validation("Price must be non-negative"));
        }
        Ok((name.to_owned(), price))
    }

    fn into_new(self) -> Result<NewMenuItem> {
        let (name, price) = self.name_and_price()?;
        Ok(NewMenuItem {
            name,
            price,
            description: self.description.unwrap_or_default(),
            image: self
                .image
                .filter(|image| !image.is_empty())
                .unwrap_or_else(|| DEFAULT_IMAGE.to_owned()),
            category: self
                .category
                .as_deref()
                .map(Category::normalize)
                .unwrap_or_default(),
        })
    }

    fn into_update(self) -> Result<MenuItemUpdate> {
        let (name, price) = self.name_and_price()?;
        Ok(MenuItemUpdate {
            name,
            price,
            description: self.description,
            image: self.image.filter(|image| !image.is_empty()),
            category: self.category.as_deref().map(Category::normalize),
        })
    }
}

/// GET /api/menu
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<MenuItem>>> {
    Ok(Json(state.store().list_menu().await?))
}

/// POST /api/menu (admin)
pub async fn create(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Payload(body): Payload<MenuItemPayload>,
) -> Result<(StatusCode, Json<MenuItem>)> {
    let item = state.store().create_menu_item(body.into_new()?).await?;
    tracing::info!(id = %item.id, "menu item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/menu/:id (admin)
pub async fn update(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Payload(body): Payload<MenuItemPayload>,
) -> Result<Json<MenuItem>> {
    let item = state
        .store()
        .update_menu_item(&id, body.into_update()?)
        .await?;
    Ok(Json(item))
}

/// DELETE /api/menu/:id (admin)
pub async fn remove(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Ack>> {
    state.store().delete_menu_item(&id).await?;
    tracing::info!(%id, "menu item deleted");
    Ok(Json(Ack::ok()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_name_or_price_rejected() {
        let payload = MenuItemPayload {
            name: Some("Knefeh".to_owned()),
            ..MenuItemPayload::default()
        };
        assert!(payload.into_new().is_err());

        let payload = MenuItemPayload {
            name: Some("   ".to_owned()),
            price: Some(Decimal::ONE),
            ..MenuItemPayload::default()
        };
        assert!(payload.into_new().is_err());
    }

    #[test]
    fn test_negative_price_rejected() {
        let payload = MenuItemPayload {
            name: Some("Knefeh".to_owned()),
            price: Some(Decimal::from(-1)),
            ..MenuItemPayload::default()
        };
        assert!(payload.into_new().is_err());
    }

    #[test]
    fn test_create_defaults() {
        let payload = MenuItemPayload {
            name: Some(" Knefeh ".to_owned()),
            price: Some(Decimal::from(4)),
            category: Some("Sweets".to_owned()),
            ..MenuItemPayload::default()
        };
        let new = payload.into_new().unwrap();
        assert_eq!(new.name, "Knefeh");
        assert_eq!(new.description, "");
        assert_eq!(new.image, DEFAULT_IMAGE);
        assert_eq!(new.category, Category::Sweets);
    }

    #[test]
    fn test_update_keeps_absent_fields_unset() {
        let payload = MenuItemPayload {
            name: Some("Knefeh".to_owned()),
            price: Some(Decimal::from(4)),
            ..MenuItemPayload::default()
        };
        let update = payload.into_update().unwrap();
        assert!(update.description.is_none());
        assert!(update.image.is_none());
        assert!(update.category.is_none());
    }
}
