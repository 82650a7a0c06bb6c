//! Sweep command - one-shot expiry pass over the snapshot

use std::path::Path;

use chrono::Utc;

use crate::cli::commands::{open_store, persist_item};
use crate::errors::Result;

pub async fn run(cwd: Option<&Path>, dry_run: bool) -> Result<()> {
    let (root, _config, store) = open_store(cwd)?;

    let expired = store.sweep_expired(Utc::now());
    for id in &expired {
        let item = store.get(id)?;
        persist_item(&root, &item, dry_run)?;
        println!("{} expired", id);
    }

    if expired.is_empty() {
        println!("Nothing to expire");
    }
    Ok(())
}
