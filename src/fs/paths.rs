//! Path resolution utilities for gavel
//!
//! Locates the data root (the directory holding `.gavel`) and constructs
//! paths to the files under it.

use std::path::{Path, PathBuf};

use crate::errors::{GavelError, Result};

/// Find the data root containing a .gavel directory.
///
/// Walks up the directory tree from the starting directory.
///
/// # Errors
/// * `RepoNotFound` - If no ancestor contains .gavel
pub fn find_data_root(start_cwd: &Path) -> Result<PathBuf> {
    let mut current = start_cwd
        .canonicalize()
        .map_err(|e| GavelError::RepoNotFound(format!("Cannot resolve path: {}", e)))?;

    loop {
        if current.join(".gavel").exists() {
            return Ok(current);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return Err(GavelError::RepoNotFound(
                    "Could not find a .gavel directory; run `gavel init` first".to_string(),
                ));
            }
        }
    }
}

/// Resolve the current working directory, optionally using an override.
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Get the path to the .gavel directory.
pub fn get_gavel_dir(root: &Path) -> PathBuf {
    root.join(".gavel")
}

/// Get the path to the config.json file.
pub fn get_config_path(root: &Path) -> PathBuf {
    get_gavel_dir(root).join("config.json")
}

/// Get the path to the items directory.
pub fn get_items_dir(root: &Path) -> PathBuf {
    get_gavel_dir(root).join("items")
}

/// Get the path to a specific item's JSON file.
pub fn get_item_path(root: &Path, id: &str) -> PathBuf {
    get_items_dir(root).join(format!("{}.json", id))
}

/// Get the path to the dispute log named by the config.
pub fn get_dispute_log_path(root: &Path, file_name: &str) -> PathBuf {
    get_gavel_dir(root).join(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_root() -> TempDir {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join(".gavel")).unwrap();
        temp
    }

    #[test]
    fn test_find_data_root_from_root() {
        let temp = setup_root();
        let root = find_data_root(temp.path()).unwrap();
        assert_eq!(
            root.canonicalize().unwrap(),
            temp.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_find_data_root_from_subdir() {
        let temp = setup_root();
        let subdir = temp.path().join("a").join("deep");
        std::fs::create_dir_all(&subdir).unwrap();

        let root = find_data_root(&subdir).unwrap();
        assert_eq!(
            root.canonicalize().unwrap(),
            temp.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_find_data_root_not_found() {
        let temp = TempDir::new().unwrap();

        let result = find_data_root(temp.path());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("gavel init"));
    }

    #[test]
    fn test_get_gavel_dir() {
        let root = PathBuf::from("/data");
        assert_eq!(get_gavel_dir(&root), PathBuf::from("/data/.gavel"));
    }

    #[test]
    fn test_get_config_path() {
        let root = PathBuf::from("/data");
        assert_eq!(
            get_config_path(&root),
            PathBuf::from("/data/.gavel/config.json")
        );
    }

    #[test]
    fn test_get_item_paths() {
        let root = PathBuf::from("/data");
        assert_eq!(get_items_dir(&root), PathBuf::from("/data/.gavel/items"));
        assert_eq!(
            get_item_path(&root, "w-001"),
            PathBuf::from("/data/.gavel/items/w-001.json")
        );
    }

    #[test]
    fn test_get_dispute_log_path() {
        let root = PathBuf::from("/data");
        assert_eq!(
            get_dispute_log_path(&root, "disputes.jsonl"),
            PathBuf::from("/data/.gavel/disputes.jsonl")
        );
    }

    #[test]
    fn test_resolve_cwd_with_override() {
        let path = PathBuf::from("/custom/path");
        assert_eq!(resolve_cwd(Some(&path)), path);
    }

    #[test]
    fn test_resolve_cwd_without_override() {
        let resolved = resolve_cwd(None);
        assert!(!resolved.as_os_str().is_empty());
    }
}
