//! Report command - forward a buyer issue to the dispute log
//!
//! Status is never touched here; dispute handling is an external process
//! and this command only hands the report across that boundary.

use std::path::Path;

use crate::cli::commands::open_store;
use crate::dispute::JsonlDisputeLog;
use crate::errors::Result;
use crate::fs;

pub async fn run(cwd: Option<&Path>, id: &str, reason: &str, dry_run: bool) -> Result<()> {
    let (root, config, store) = open_store(cwd)?;

    if dry_run {
        // Still validate the item and its status before claiming success.
        let item = store.get(id)?;
        crate::domain::report_issue(&item, reason, &crate::dispute::NullDisputeSink)?;
        tracing::info!("[DRY RUN] forward report for {} to dispute log", id);
        return Ok(());
    }

    let sink = JsonlDisputeLog::new(fs::get_dispute_log_path(&root, &config.dispute_log));
    store.report_issue(id, reason, &sink)?;

    println!("{} issue reported", id);
    Ok(())
}
