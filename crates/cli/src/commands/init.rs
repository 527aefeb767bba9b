//! `init` command: create the data directory and empty collection files.

use std::path::Path;

/// Collection files the server expects under the data directory.
const COLLECTION_FILES: &[&str] = &["menu.json", "orders.json", "contact_messages.json"];

/// Create the data directory and, for each missing collection file, an empty
/// JSON array. Existing files are left untouched.
///
/// # Errors
///
/// Returns an error if the directory or a file cannot be created.
pub fn run(data_dir: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(data_dir)?;
    for file in COLLECTION_FILES {
        let path = data_dir.join(file);
        if path.exists() {
            tracing::info!(path = %path.display(), "already exists, skipping");
            continue;
        }
        std::fs::write(&path, b"[]\n")?;
        tracing::info!(path = %path.display(), "created");
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_empty_collections() {
        let dir = TempDir::new().unwrap();
        let data_dir = dir.path().join("data");
        run(&data_dir).unwrap();

        for file in COLLECTION_FILES {
            let contents = std::fs::read_to_string(data_dir.join(file)).unwrap();
            assert_eq!(contents.trim(), "[]");
        }
    }

    #[test]
    fn test_keeps_existing_files() {
        let dir = TempDir::new().unwrap();
        let menu = dir.path().join("menu.json");
        std::fs::write(&menu, b"[{\"id\":\"item_1\"}]").unwrap();

        run(dir.path()).unwrap();

        let contents = std::fs::read_to_string(&menu).unwrap();
        assert!(contents.contains("item_1"));
    }
}
