//! JSON file operations with schema validation
//!
//! Read and write JSON files with serde validation; writes are atomic
//! (temp file, then rename).

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{GavelError, Result};
use crate::schemas::{Config, WonItem};

use super::paths::{get_config_path, get_item_path, get_items_dir};

/// Read and deserialize a JSON file.
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidJson` - If the file contains invalid JSON or fails schema validation
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GavelError::FileNotFound(format!("File not found: {}", path.display()))
        } else {
            GavelError::Io(e)
        }
    })?;

    serde_json::from_str(&content).map_err(|e| {
        GavelError::InvalidJson(format!("Invalid JSON in file {}: {}", path.display(), e))
    })
}

/// Write a value to a JSON file with pretty formatting.
///
/// Uses atomic write (write to temp file, then rename) to avoid partial writes.
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let content =
        serde_json::to_string_pretty(data).map_err(|e| GavelError::InvalidJson(e.to_string()))?;

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    // Write atomically: write to temp file, then rename
    let temp_path = path.with_extension("json.tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.write_all(b"\n")?;
    file.sync_all()?;
    drop(file);

    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Read the config.json file for a data root.
///
/// Returns the default config if the file doesn't exist.
pub fn read_config(root: &Path) -> Result<Config> {
    let path = get_config_path(root);
    if !path.exists() {
        return Ok(Config::default());
    }
    read_json(&path)
}

/// Read one won-item file.
pub fn read_item(root: &Path, id: &str) -> Result<WonItem> {
    let path = get_item_path(root, id);
    read_json(&path)
}

/// Write one won-item file.
pub fn write_item(root: &Path, item: &WonItem) -> Result<()> {
    let path = get_item_path(root, &item.id);
    write_json(&path, item)
}

/// Load every item file under .gavel/items.
///
/// An empty or missing items directory yields an empty list; a file that
/// fails to parse is an error, never silently skipped.
pub fn load_all_items(root: &Path) -> Result<Vec<WonItem>> {
    let dir = get_items_dir(root);
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut items = Vec::new();
    for entry in fs::read_dir(&dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) == Some("json") {
            items.push(read_json::<WonItem>(&path)?);
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::{Seller, VerificationStatus};
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn make_item(id: &str) -> WonItem {
        WonItem::new(
            id.to_string(),
            "Vintage film camera".to_string(),
            45_000,
            Seller::named("photo-attic"),
            Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_read_json_file_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nonexistent.json");

        let result: Result<WonItem> = read_json(&path);
        assert!(matches!(
            result.unwrap_err(),
            GavelError::FileNotFound(_)
        ));
    }

    #[test]
    fn test_read_json_invalid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("invalid.json");
        fs::write(&path, "not valid json {").unwrap();

        let result: Result<WonItem> = read_json(&path);
        assert!(matches!(result.unwrap_err(), GavelError::InvalidJson(_)));
    }

    #[test]
    fn test_write_and_read_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.json");

        let item = make_item("w-001");
        write_json(&path, &item).unwrap();
        assert!(path.exists());

        let read: WonItem = read_json(&path).unwrap();
        assert_eq!(read.id, item.id);
        assert_eq!(read.won_at, item.won_at);
    }

    #[test]
    fn test_write_json_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("dir").join("test.json");

        write_json(&path, &make_item("w-001")).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_read_config_default_when_missing() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join(".gavel")).unwrap();

        let config = read_config(temp.path()).unwrap();
        assert_eq!(config.poll_interval_seconds, 1);
        assert_eq!(config.dispute_log, "disputes.jsonl");
    }

    #[test]
    fn test_read_write_item() {
        let temp = TempDir::new().unwrap();

        write_item(temp.path(), &make_item("w-001")).unwrap();

        let read = read_item(temp.path(), "w-001").unwrap();
        assert_eq!(read.id, "w-001");
        assert_eq!(read.status, VerificationStatus::AwaitingVerification);
    }

    #[test]
    fn test_load_all_items_empty_dir() {
        let temp = TempDir::new().unwrap();
        assert!(load_all_items(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_load_all_items() {
        let temp = TempDir::new().unwrap();
        write_item(temp.path(), &make_item("w-001")).unwrap();
        write_item(temp.path(), &make_item("w-002")).unwrap();

        let mut ids: Vec<String> = load_all_items(temp.path())
            .unwrap()
            .into_iter()
            .map(|i| i.id)
            .collect();
        ids.sort();
        assert_eq!(ids, vec!["w-001", "w-002"]);
    }

    #[test]
    fn test_load_all_items_rejects_corrupt_file() {
        let temp = TempDir::new().unwrap();
        write_item(temp.path(), &make_item("w-001")).unwrap();
        fs::write(get_items_dir(temp.path()).join("broken.json"), "{oops").unwrap();

        assert!(load_all_items(temp.path()).is_err());
    }
}
