//! Supabase REST table backing.
//!
//! Each store operation maps to one row-level request against
//! `{url}/rest/v1/{table}`. Row identity (uuid ids) and ordering are
//! delegated to the service. Mutations send `Prefer: return=representation`
//! so an empty representation doubles as the NotFound signal.
//!
//! No request timeout is configured; a hung backend hangs the request.

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use rust_decimal::Decimal;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use chrono::{DateTime, Utc};
use delights_core::{
    Category, ContactMessage, Customer, DEFAULT_IMAGE, Email, MenuItem, MenuItemId, MessageId,
    Order, OrderId, OrderItem, OrderStatus, Phone,
};

use super::{MenuItemUpdate, NewContactMessage, NewMenuItem, NewOrder, StoreError};
use crate::config::SupabaseConfig;

const MENU_TABLE: &str = "menu_items";
const ORDERS_TABLE: &str = "orders";
const CONTACT_TABLE: &str = "contact_messages";

const MENU_COLUMNS: &str = "id,name,description,price,image,category,created_at";
const ORDER_COLUMNS: &str =
    "id,created_at,status,customer_name,customer_phone,customer_address,items,total";
const CONTACT_COLUMNS: &str = "id,created_at,name,email,message";

/// Supabase-backed record store.
pub struct SupabaseStore {
    http: reqwest::Client,
    base_url: String,
    key: SecretString,
}

impl SupabaseStore {
    /// Create a store for the configured Supabase project.
    #[must_use]
    pub fn new(config: &SupabaseConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.url.trim_end_matches('/').to_owned(),
            key: config.key.clone(),
        }
    }

    fn request(&self, method: Method, table: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}/rest/v1/{table}", self.base_url))
            .header("apikey", self.key.expose_secret())
            .bearer_auth(self.key.expose_secret())
    }

    pub(crate) async fn list_menu(&self) -> Result<Vec<MenuItem>, StoreError> {
        let response = self
            .request(Method::GET, MENU_TABLE)
            .query(&[("select", MENU_COLUMNS), ("order", "created_at.asc")])
            .send()
            .await?;
        let rows: Vec<MenuRow> = expect_rows(response).await?;
        Ok(rows.into_iter().map(MenuItem::from).collect())
    }

    pub(crate) async fn create_menu_item(
        &self,
        new: NewMenuItem,
    ) -> Result<MenuItem, StoreError> {
        let response = self
            .request(Method::POST, MENU_TABLE)
            .header("Prefer", "return=representation")
            .query(&[("select", MENU_COLUMNS)])
            .json(&MenuWrite::from(&new))
            .send()
            .await?;
        let rows: Vec<MenuRow> = expect_rows(response).await?;
        single(rows).map(MenuItem::from)
    }

    pub(crate) async fn update_menu_item(
        &self,
        id: &str,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, StoreError> {
        let filter = format!("eq.{id}");
        let response = self
            .request(Method::PATCH, MENU_TABLE)
            .header("Prefer", "return=representation")
            .query(&[("select", MENU_COLUMNS), ("id", filter.as_str())])
            .json(&MenuWrite::from(&update))
            .send()
            .await?;
        let rows: Vec<MenuRow> = expect_rows(response).await?;
        rows.into_iter()
            .next()
            .map(MenuItem::from)
            .ok_or(StoreError::NotFound)
    }

    pub(crate) async fn delete_menu_item(&self, id: &str) -> Result<(), StoreError> {
        self.delete_row(MENU_TABLE, id).await
    }

    pub(crate) async fn list_orders(&self) -> Result<Vec<Order>, StoreError> {
        let response = self
            .request(Method::GET, ORDERS_TABLE)
            .query(&[("select", ORDER_COLUMNS), ("order", "created_at.desc")])
            .send()
            .await?;
        let rows: Vec<OrderRow> = expect_rows(response).await?;
        Ok(rows.into_iter().map(Order::from).collect())
    }

    pub(crate) async fn create_order(&self, new: NewOrder) -> Result<Order, StoreError> {
        let write = OrderWrite {
            created_at: Utc::now(),
            status: OrderStatus::Pending,
            customer_name: &new.customer.name,
            customer_phone: new.customer.phone.as_str(),
            customer_address: &new.customer.address,
            items: &new.items,
            total: new.total,
        };
        let response = self
            .request(Method::POST, ORDERS_TABLE)
            .header("Prefer", "return=representation")
            .query(&[("select", ORDER_COLUMNS)])
            .json(&write)
            .send()
            .await?;
        let rows: Vec<OrderRow> = expect_rows(response).await?;
        single(rows).map(Order::from)
    }

    pub(crate) async fn set_order_status(
        &self,
        id: &str,
        status: OrderStatus,
    ) -> Result<Order, StoreError> {
        let filter = format!("eq.{id}");
        let response = self
            .request(Method::PATCH, ORDERS_TABLE)
            .header("Prefer", "return=representation")
            .query(&[("select", ORDER_COLUMNS), ("id", filter.as_str())])
            .json(&serde_json::json!({ "status": status }))
            .send()
            .await?;
        let rows: Vec<OrderRow> = expect_rows(response).await?;
        rows.into_iter()
            .next()
            .map(Order::from)
            .ok_or(StoreError::NotFound)
    }

    pub(crate) async fn delete_order(&self, id: &str) -> Result<(), StoreError> {
        self.delete_row(ORDERS_TABLE, id).await
    }

    pub(crate) async fn list_contact_messages(
        &self,
    ) -> Result<Vec<ContactMessage>, StoreError> {
        let response = self
            .request(Method::GET, CONTACT_TABLE)
            .query(&[("select", CONTACT_COLUMNS), ("order", "created_at.desc")])
            .send()
            .await?;
        let rows: Vec<ContactRow> = expect_rows(response).await?;
        Ok(rows.into_iter().map(ContactMessage::from).collect())
    }

    pub(crate) async fn create_contact_message(
        &self,
        new: NewContactMessage,
    ) -> Result<ContactMessage, StoreError> {
        let write = ContactWrite {
            created_at: Utc::now(),
            name: &new.name,
            email: new.email.as_str(),
            message: &new.message,
        };
        let response = self
            .request(Method::POST, CONTACT_TABLE)
            .header("Prefer", "return=representation")
            .query(&[("select", CONTACT_COLUMNS)])
            .json(&write)
            .send()
            .await?;
        let rows: Vec<ContactRow> = expect_rows(response).await.map_err(contact_table_hint)?;
        single(rows).map(ContactMessage::from)
    }

    /// Delete one row by id; an empty representation means the id was unknown.
    async fn delete_row(&self, table: &str, id: &str) -> Result<(), StoreError> {
        let filter = format!("eq.{id}");
        let response = self
            .request(Method::DELETE, table)
            .header("Prefer", "return=representation")
            .query(&[("select", "id"), ("id", filter.as_str())])
            .send()
            .await?;
        let rows: Vec<IdRow> = expect_rows(response).await?;
        if rows.is_empty() {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

/// Read the row array out of a response, surfacing the service's error
/// message on failure.
async fn expect_rows<T: DeserializeOwned>(response: Response) -> Result<Vec<T>, StoreError> {
    let status = response.status();
    if !status.is_success() {
        let message = remote_message(status, &response.text().await.unwrap_or_default());
        return Err(StoreError::Remote(message));
    }
    Ok(response.json().await?)
}

/// Pull the `message` field out of a PostgREST error body, falling back to
/// the raw text.
fn remote_message(status: StatusCode, body: &str) -> String {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
    parsed
        .as_ref()
        .and_then(|v| v.get("message"))
        .and_then(serde_json::Value::as_str)
        .map_or_else(
            || {
                if body.trim().is_empty() {
                    format!("backend returned {status}")
                } else {
                    body.trim().to_owned()
                }
            },
            ToOwned::to_owned,
        )
}

/// The one remote failure with a known fix: the contact table was never
/// created. Point the operator at the schema file.
fn contact_table_hint(err: StoreError) -> StoreError {
    match err {
        StoreError::Remote(msg)
            if msg.contains("Could not find the table 'public.contact_messages'") =>
        {
            StoreError::Remote(
                "Contact messages table is missing in Supabase. Run supabase_schema.sql to \
                 create public.contact_messages."
                    .to_owned(),
            )
        }
        other => other,
    }
}

fn single<T>(rows: Vec<T>) -> Result<T, StoreError> {
    rows.into_iter()
        .next()
        .ok_or_else(|| StoreError::Remote("backend returned an empty representation".to_owned()))
}

/// Accept uuid strings and integer ids alike.
fn de_row_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        other => Ok(other.to_string()),
    }
}

#[derive(Debug, Deserialize)]
struct IdRow {
    #[serde(deserialize_with = "de_row_id")]
    #[allow(dead_code)]
    id: String,
}

#[derive(Debug, Deserialize)]
struct MenuRow {
    #[serde(deserialize_with = "de_row_id")]
    id: String,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    price: Option<Decimal>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    category: Option<Category>,
}

impl From<MenuRow> for MenuItem {
    fn from(row: MenuRow) -> Self {
        Self {
            id: MenuItemId::new(row.id),
            name: row.name,
            description: row.description.unwrap_or_default(),
            price: row.price.unwrap_or_default(),
            image: row.image.unwrap_or_else(|| DEFAULT_IMAGE.to_owned()),
            category: row.category.unwrap_or_default(),
        }
    }
}

/// Insert/update payload for `menu_items`. One shape serves both because
/// PATCH omits nothing: required fields are always present and optional
/// fields are skipped when `None`, leaving the column untouched.
#[derive(Debug, Serialize)]
struct MenuWrite<'a> {
    name: &'a str,
    price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'a str>,
}

impl<'a> From<&'a NewMenuItem> for MenuWrite<'a> {
    fn from(new: &'a NewMenuItem) -> Self {
        Self {
            name: &new.name,
            price: new.price,
            description: Some(&new.description),
            image: Some(&new.image),
            category: Some(new.category.as_str()),
        }
    }
}

impl<'a> From<&'a MenuItemUpdate> for MenuWrite<'a> {
    fn from(update: &'a MenuItemUpdate) -> Self {
        Self {
            name: &update.name,
            price: update.price,
            description: update.description.as_deref(),
            image: update.image.as_deref(),
            category: update.category.map(Category::as_str),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OrderRow {
    #[serde(deserialize_with = "de_row_id")]
    id: String,
    created_at: DateTime<Utc>,
    #[serde(default)]
    status: Option<OrderStatus>,
    #[serde(default)]
    customer_name: Option<String>,
    customer_phone: Phone,
    #[serde(default)]
    customer_address: Option<String>,
    #[serde(default)]
    items: Option<Vec<OrderItem>>,
    #[serde(default)]
    total: Option<Decimal>,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Self {
            id: OrderId::new(row.id),
            created_at: row.created_at,
            status: row.status.unwrap_or_default(),
            customer: Customer {
                name: row.customer_name.unwrap_or_default(),
                phone: row.customer_phone,
                address: row.customer_address.unwrap_or_default(),
            },
            items: row.items.unwrap_or_default(),
            total: row.total.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
struct OrderWrite<'a> {
    created_at: DateTime<Utc>,
    status: OrderStatus,
    customer_name: &'a str,
    customer_phone: &'a str,
    customer_address: &'a str,
    items: &'a [OrderItem],
    total: Decimal,
}

#[derive(Debug, Deserialize)]
struct ContactRow {
    #[serde(deserialize_with = "de_row_id")]
    id: String,
    created_at: DateTime<Utc>,
    name: String,
    email: Email,
    message: String,
}

impl From<ContactRow> for ContactMessage {
    fn from(row: ContactRow) -> Self {
        Self {
            id: MessageId::new(row.id),
            created_at: row.created_at,
            name: row.name,
            email: row.email,
            message: row.message,
        }
    }
}

#[derive(Debug, Serialize)]
struct ContactWrite<'a> {
    created_at: DateTime<Utc>,
    name: &'a str,
    email: &'a str,
    message: &'a str,
}
