//! Flat-file JSON snapshot store.
//!
//! Three independent JSON array files, one per collection, each read fully
//! into memory per operation and rewritten wholesale on every mutation.
//! Writes go to a temporary sibling file and are renamed into place, so a
//! crash mid-write leaves readers with either the prior snapshot or the new
//! one, never a torn file.
//!
//! Missing or corrupt files read as empty collections: an empty menu beats a
//! server that refuses to start.
//!
//! Mutations on a collection are serialized through a per-collection mutex,
//! so two near-simultaneous creates cannot overwrite each other's append.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use uuid::Uuid;

use delights_core::{ContactMessage, MenuItem, MenuItemId, MessageId, Order, OrderId, OrderStatus};

use super::{MenuItemUpdate, NewContactMessage, NewMenuItem, NewOrder, StoreError};

const MENU_FILE: &str = "menu.json";
const ORDERS_FILE: &str = "orders.json";
const CONTACT_FILE: &str = "contact_messages.json";

/// File-backed record store.
pub struct FileStore {
    menu: Collection<MenuItem>,
    orders: Collection<Order>,
    contact: Collection<ContactMessage>,
}

impl FileStore {
    /// Open a file store rooted at `data_dir`, creating the directory if
    /// needed. Collection files are created lazily on first write.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn open(data_dir: &Path) -> std::io::Result<Self> {
        std::fs::create_dir_all(data_dir)?;
        Ok(Self {
            menu: Collection::new(data_dir.join(MENU_FILE)),
            orders: Collection::new(data_dir.join(ORDERS_FILE)),
            contact: Collection::new(data_dir.join(CONTACT_FILE)),
        })
    }

    pub(crate) async fn list_menu(&self) -> Result<Vec<MenuItem>, StoreError> {
        Ok(self.menu.load().await)
    }

    pub(crate) async fn create_menu_item(
        &self,
        new: NewMenuItem,
    ) -> Result<MenuItem, StoreError> {
        self.menu
            .mutate(|items| {
                let item = MenuItem {
                    id: MenuItemId::generate(),
                    name: new.name,
                    description: new.description,
                    price: new.price,
                    image: new.image,
                    category: new.category,
                };
                items.push(item.clone());
                Ok(item)
            })
            .await
    }

    pub(crate) async fn update_menu_item(
        &self,
        id: &str,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, StoreError> {
        self.menu
            .mutate(|items| {
                let item = items
                    .iter_mut()
                    .find(|item| item.id == *id)
                    .ok_or(StoreError::NotFound)?;
                update.apply(item);
                Ok(item.clone())
            })
            .await
    }

    pub(crate) async fn delete_menu_item(&self, id: &str) -> Result<(), StoreError> {
        self.menu
            .mutate(|items| {
                let before = items.len();
                items.retain(|item| item.id != *id);
                if items.len() == before {
                    return Err(StoreError::NotFound);
                }
                Ok(())
            })
            .await
    }

    pub(crate) async fn list_orders(&self) -> Result<Vec<Order>, StoreError> {
        let mut orders = self.orders.load().await;
        orders.reverse(); // stored oldest first, served newest first
        Ok(orders)
    }

    pub(crate) async fn create_order(&self, new: NewOrder) -> Result<Order, StoreError> {
        self.orders
            .mutate(|orders| {
                let order = Order {
                    id: OrderId::generate(),
                    created_at: Utc::now(),
                    status: OrderStatus::Pending,
                    customer: new.customer,
                    items: new.items,
                    total: new.total,
                };
                orders.push(order.clone());
                Ok(order)
            })
            .await
    }

    pub(crate) async fn set_order_status(
        &self,
        id: &str,
        status: OrderStatus,
    ) -> Result<Order, StoreError> {
        self.orders
            .mutate(|orders| {
                let order = orders
                    .iter_mut()
                    .find(|order| order.id == *id)
                    .ok_or(StoreError::NotFound)?;
                order.status = status;
                Ok(order.clone())
            })
            .await
    }

    pub(crate) async fn delete_order(&self, id: &str) -> Result<(), StoreError> {
        self.orders
            .mutate(|orders| {
                let before = orders.len();
                orders.retain(|order| order.id != *id);
                if orders.len() == before {
                    return Err(StoreError::NotFound);
                }
                Ok(())
            })
            .await
    }

    pub(crate) async fn list_contact_messages(
        &self,
    ) -> Result<Vec<ContactMessage>, StoreError> {
        let mut messages = self.contact.load().await;
        messages.reverse();
        Ok(messages)
    }

    pub(crate) async fn create_contact_message(
        &self,
        new: NewContactMessage,
    ) -> Result<ContactMessage, StoreError> {
        self.contact
            .mutate(|messages| {
                let message = ContactMessage {
                    id: MessageId::generate(),
                    created_at: Utc::now(),
                    name: new.name,
                    email: new.email,
                    message: new.message,
                };
                messages.push(message.clone());
                Ok(message)
            })
            .await
    }
}

/// One collection file plus its write lock.
struct Collection<T> {
    path: PathBuf,
    write_lock: Mutex<()>,
    _record: PhantomData<T>,
}

impl<T: Serialize + DeserializeOwned> Collection<T> {
    fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
            _record: PhantomData,
        }
    }

    /// Read the full collection. Missing or unreadable files are an empty
    /// collection; corrupt JSON is logged and also treated as empty.
    async fn load(&self) -> Vec<T> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_slice(&bytes) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "corrupt collection file, treating as empty"
                );
                Vec::new()
            }
        }
    }

    /// Rewrite the full collection atomically: serialize to a temporary
    /// sibling file, then rename over the target.
    async fn save(&self, records: &[T]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(records)?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(format!(".{}.tmp", Uuid::new_v4()));
        let tmp = PathBuf::from(tmp);
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    /// Run a read-modify-write cycle under the collection's write lock.
    /// The file is only rewritten if the closure succeeds.
    async fn mutate<R>(
        &self,
        f: impl FnOnce(&mut Vec<T>) -> Result<R, StoreError>,
    ) -> Result<R, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load().await;
        let result = f(&mut records)?;
        self.save(&records).await?;
        Ok(result)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use delights_core::{Category, Customer, OrderItem, Phone};
    use rust_decimal::Decimal;
    use tempfile::TempDir;

    fn new_item(name: &str, price: Decimal) -> NewMenuItem {
        NewMenuItem {
            name: name.to_owned(),
            description: String::new(),
            price,
            image: delights_core::DEFAULT_IMAGE.to_owned(),
            category: Category::DailyPlatters,
        }
    }

    fn new_order(total: Decimal) -> NewOrder {
        let phone = Phone::parse("03123456").unwrap();
        NewOrder {
            customer: Customer::new("Amal", phone, "Beirut"),
            items: vec![OrderItem::snapshot("item_1", "Cake", Decimal::from(5), 2)],
            total,
        }
    }

    #[tokio::test]
    async fn test_menu_create_then_list() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        let created = store
            .create_menu_item(new_item("Daily Special", Decimal::new(85, 1)))
            .await
            .unwrap();
        assert!(created.id.as_str().starts_with("item_"));

        let listed = store.list_menu().await.unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn test_menu_update_merges_and_persists() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        let created = store
            .create_menu_item(NewMenuItem {
                description: "Warm bowls".to_owned(),
                ..new_item("Soups & Stews", Decimal::from(6))
            })
            .await
            .unwrap();

        let updated = store
            .update_menu_item(
                created.id.as_str(),
                MenuItemUpdate {
                    name: "Soups".to_owned(),
                    price: Decimal::from(7),
                    description: None,
                    image: None,
                    category: Some(Category::Sweets),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Soups");
        assert_eq!(updated.description, "Warm bowls");
        assert_eq!(updated.category, Category::Sweets);

        // Re-open from disk to prove it persisted
        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.list_menu().await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        let err = store
            .update_menu_item(
                "item_missing",
                MenuItemUpdate {
                    name: "x".to_owned(),
                    price: Decimal::ONE,
                    description: None,
                    image: None,
                    category: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one_and_is_idempotent_as_not_found() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        let a = store
            .create_menu_item(new_item("A", Decimal::ONE))
            .await
            .unwrap();
        store
            .create_menu_item(new_item("B", Decimal::TWO))
            .await
            .unwrap();

        store.delete_menu_item(a.id.as_str()).await.unwrap();
        assert_eq!(store.list_menu().await.unwrap().len(), 1);

        let err = store.delete_menu_item(a.id.as_str()).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }

    #[tokio::test]
    async fn test_orders_listed_newest_first() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        let first = store.create_order(new_order(Decimal::from(10))).await.unwrap();
        let second = store.create_order(new_order(Decimal::from(20))).await.unwrap();

        let listed = store.list_orders().await.unwrap();
        assert_eq!(listed.first().map(|o| o.id.clone()), Some(second.id));
        assert_eq!(listed.last().map(|o| o.id.clone()), Some(first.id));
    }

    #[tokio::test]
    async fn test_order_status_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        let order = store.create_order(new_order(Decimal::from(10))).await.unwrap();
        assert_eq!(order.status, OrderStatus::Pending);

        let updated = store
            .set_order_status(order.id.as_str(), OrderStatus::Completed)
            .await
            .unwrap();
        assert_eq!(updated.status, OrderStatus::Completed);

        let err = store
            .set_order_status("ord_missing", OrderStatus::Completed)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }

    #[tokio::test]
    async fn test_corrupt_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(MENU_FILE), b"{not json").unwrap();

        let store = FileStore::open(dir.path()).unwrap();
        assert!(store.list_menu().await.unwrap().is_empty());

        // The next mutation replaces the corrupt file with a valid snapshot
        store
            .create_menu_item(new_item("Fresh start", Decimal::ONE))
            .await
            .unwrap();
        assert_eq!(store.list_menu().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_save_leaves_no_tmp_files() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        store
            .create_menu_item(new_item("A", Decimal::ONE))
            .await
            .unwrap();

        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_creates_all_persist() {
        let dir = TempDir::new().unwrap();
        let store = std::sync::Arc::new(FileStore::open(dir.path()).unwrap());

        let mut handles = Vec::new();
        for i in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .create_menu_item(new_item(&format!("dish-{i}"), Decimal::ONE))
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(store.list_menu().await.unwrap().len(), 8);
    }
}
