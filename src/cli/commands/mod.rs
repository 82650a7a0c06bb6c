//! CLI command implementations

pub mod init;
pub mod list;
pub mod receive;
pub mod report;
pub mod show;
pub mod status;
pub mod sweep;
pub mod verify;
pub mod watch;
pub mod win;

use std::path::{Path, PathBuf};

use chrono::Duration;
use serde::Serialize;

use crate::config::load_config;
use crate::errors::Result;
use crate::fs;
use crate::schemas::{Config, VerificationStatus, WonItem};
use crate::store::WonItemStore;

/// Envelope for --json output
#[derive(Serialize)]
pub(crate) struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Locate the data root and load its item snapshot into a store.
pub(crate) fn open_store(cwd: Option<&Path>) -> Result<(PathBuf, Config, WonItemStore)> {
    let root = fs::find_data_root(&fs::resolve_cwd(cwd))?;
    let config = load_config(&root)?;
    let store = WonItemStore::new();
    for item in fs::load_all_items(&root)? {
        store.insert(item)?;
    }
    Ok((root, config, store))
}

/// Write one item back to its snapshot file, honoring --dry-run.
pub(crate) fn persist_item(root: &Path, item: &WonItem, dry_run: bool) -> Result<()> {
    if dry_run {
        tracing::info!(
            "[DRY RUN] write {}",
            fs::get_item_path(root, &item.id).display()
        );
        return Ok(());
    }
    fs::write_item(root, item)
}

/// Display glyph per status. Presentation only; the state machine knows
/// nothing about it.
pub(crate) fn status_glyph(status: VerificationStatus) -> &'static str {
    match status {
        VerificationStatus::AwaitingVerification => "○",
        VerificationStatus::ContactVerified => "◐",
        VerificationStatus::Received => "●",
        VerificationStatus::Expired => "✗",
    }
}

/// Render a countdown as `23h 59m 59s`.
pub(crate) fn format_remaining(left: Duration) -> String {
    let total = left.num_seconds();
    format!("{}h {}m {}s", total / 3600, (total % 3600) / 60, total % 60)
}
