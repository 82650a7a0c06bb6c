//! File system utilities for gavel
//!
//! Provides path resolution and JSON file operations.

mod json;
mod paths;

pub use json::{load_all_items, read_config, read_item, read_json, write_item, write_json};
pub use paths::{
    find_data_root, get_config_path, get_dispute_log_path, get_gavel_dir, get_item_path,
    get_items_dir, resolve_cwd,
};
