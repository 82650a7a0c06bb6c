//! Verify command - buyer confirms seller contact
//!
//! Runs the expiry-wins rule through the store: a verify issued after the
//! deadline records the expiry and reports the rejection, so the snapshot
//! is written back even when the command fails.

use std::path::Path;

use chrono::Utc;

use crate::cli::commands::{open_store, persist_item};
use crate::errors::Result;

pub async fn run(cwd: Option<&Path>, id: &str, dry_run: bool) -> Result<()> {
    let (root, _config, store) = open_store(cwd)?;

    let outcome = store.verify_contact(id, Utc::now());

    // The store may have recorded an expiry even when the verify was
    // rejected; persist whatever it now holds before propagating.
    if let Ok(current) = store.get(id) {
        persist_item(&root, &current, dry_run)?;
    }

    let item = outcome?;
    println!("{} contact verified", item.id);
    Ok(())
}
