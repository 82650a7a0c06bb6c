//! Receive command - buyer confirms physical receipt

use std::path::Path;

use chrono::Utc;

use crate::cli::commands::{open_store, persist_item};
use crate::errors::Result;

pub async fn run(cwd: Option<&Path>, id: &str, dry_run: bool) -> Result<()> {
    let (root, _config, store) = open_store(cwd)?;

    let item = store.confirm_received(id, Utc::now())?;
    persist_item(&root, &item, dry_run)?;

    println!("{} received", item.id);
    Ok(())
}
