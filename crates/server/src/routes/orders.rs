//! Order route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use delights_core::{Customer, Order, OrderItem, OrderStatus, Phone};

use super::Ack;
use crate::error::{AppError, Result};
use crate::middleware::{Payload, RequireAdmin};
use crate::state::AppState;
use crate::store::NewOrder;

/// Checkout request body.
#[derive(Debug, Default, Deserialize)]
pub struct OrderPayload {
    #[serde(default)]
    pub customer: CustomerPayload,
    #[serde(default)]
    pub items: Vec<OrderItemPayload>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CustomerPayload {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OrderItemPayload {
    pub id: Option<String>,
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub qty: Option<i64>,
}

/// Status-change request body.
#[derive(Debug, Default, Deserialize)]
pub struct StatusPayload {
    pub status: Option<String>,
}

impl OrderPayload {
    /// Validate the checkout payload into a persistable order draft.
    ///
    /// Non-positive quantities are dropped; the remaining list must be
    /// non-empty, the phone must normalize, and the address must not be
    /// blank. The total is computed here, once, from the filtered items.
    fn into_new(self) -> Result<NewOrder> {
        let items: Vec<OrderItem> = self
            .items
            .into_iter()
            .filter_map(|line| {
                let qty = u32::try_from(line.qty.unwrap_or(0)).ok().filter(|q| *q > 0)?;
                Some(OrderItem::snapshot(
                    line.id.as_deref().unwrap_or(""),
                    line.name.as_deref().unwrap_or(""),
                    line.price.unwrap_or_default(),
                    qty,
                ))
            })
            .collect();

        if items.is_empty() {
            return Err(AppError::validation("Cart is empty"));
        }

        let phone = self
            .customer
            .phone
            .as_deref()
            .and_then(|raw| Phone::parse(raw).ok())
            .ok_or_else(|| AppError::validation("Phone number is required"))?;

        let address = self.customer.address.as_deref().unwrap_or("").trim();
        if address.is_empty() {
            return Err(AppError::validation("Delivery address is required"));
        }

        let customer = Customer::new(self.customer.name.as_deref().unwrap_or(""), phone, address);
        let total = Order::total_of(&items);

        Ok(NewOrder {
            customer,
            items,
            total,
        })
    }
}

/// POST /api/orders (public checkout)
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    Payload(body): Payload<OrderPayload>,
) -> Result<(StatusCode, Json<Order>)> {
    let order = state.store().create_order(body.into_new()?).await?;
    tracing::info!(id = %order.id, total = %order.total, "order placed");
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /api/orders (admin)
pub async fn list(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<Order>>> {
    Ok(Json(state.store().list_orders().await?))
}

/// PUT /api/orders/:id/status (admin)
pub async fn set_status(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Payload(body): Payload<StatusPayload>,
) -> Result<Json<Order>> {
    let status: OrderStatus = body
        .status
        .as_deref()
        .unwrap_or("")
        .parse()
        .map_err(|_| AppError::validation("Invalid status"))?;
    let order = state.store().set_order_status(&id, status).await?;
    tracing::info!(%id, %status, "order status changed");
    Ok(Json(order))
}

/// DELETE /api/orders/:id (admin)
pub async fn remove(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Ack>> {
    state.store().delete_order(&id).await?;
    tracing::info!(%id, "order deleted");
    Ok(Json(Ack::ok()))
}
