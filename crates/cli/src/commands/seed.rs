//! `seed` command: write the demo menu through the file store.

use std::path::Path;

use rust_decimal::Decimal;
use thiserror::Error;

use delights_core::{Category, DEFAULT_IMAGE};
use delights_server::store::{FileStore, NewMenuItem, Store, StoreError};

/// Errors from the seed command.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("menu already has {0} items; pass --force to seed anyway")]
    MenuNotEmpty(usize),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The placeholder menu shown before the kitchen has entered real dishes.
fn demo_items() -> Vec<NewMenuItem> {
    vec![
        NewMenuItem {
            name: "Daily Special".to_owned(),
            description: "Today's rotating home-cooked favourite.".to_owned(),
            price: Decimal::new(85, 1),
            image: DEFAULT_IMAGE.to_owned(),
            category: Category::DailyPlatters,
        },
        NewMenuItem {
            name: "Soups & Stews".to_owned(),
            description: "Warm bowls simmered slowly for deep flavour.".to_owned(),
            price: Decimal::from(6),
            image: "assets/images/menu2.jpg".to_owned(),
            category: Category::DailyPlatters,
        },
        NewMenuItem {
            name: "Desserts".to_owned(),
            description: "Homemade treats to sweeten your day.".to_owned(),
            price: Decimal::from(4),
            image: "assets/images/menu3.jpg".to_owned(),
            category: Category::Sweets,
        },
    ]
}

/// Seed the demo menu into the file-backed store.
///
/// Refuses when the menu already has items, unless `force` is set, in which
/// case the demo items are added alongside the existing ones.
///
/// # Errors
///
/// Returns an error if the menu is non-empty without `force`, or if the
/// store fails.
pub async fn run(data_dir: &Path, force: bool) -> Result<(), SeedError> {
    let store = Store::File(FileStore::open(data_dir)?);

    let existing = store.list_menu().await?;
    if !existing.is_empty() && !force {
        return Err(SeedError::MenuNotEmpty(existing.len()));
    }

    for item in demo_items() {
        let created = store.create_menu_item(item).await?;
        tracing::info!(id = %created.id, name = %created.name, "seeded menu item");
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_seed_populates_empty_menu() {
        let dir = TempDir::new().unwrap();
        run(dir.path(), false).await.unwrap();

        let store = Store::File(FileStore::open(dir.path()).unwrap());
        let menu = store.list_menu().await.unwrap();
        assert_eq!(menu.len(), 3);
        assert!(menu.iter().any(|item| item.category == Category::Sweets));
    }

    #[tokio::test]
    async fn test_seed_refuses_non_empty_menu() {
        let dir = TempDir::new().unwrap();
        run(dir.path(), false).await.unwrap();

        let err = run(dir.path(), false).await.unwrap_err();
        assert!(matches!(err, SeedError::MenuNotEmpty(3)));

        // Forced seeding appends
        run(dir.path(), true).await.unwrap();
        let store = Store::File(FileStore::open(dir.path()).unwrap());
        assert_eq!(store.list_menu().await.unwrap().len(), 6);
    }
}
