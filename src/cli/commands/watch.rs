//! Watch command - run the deadline poller against the snapshot
//!
//! Ticks at the configured interval until the watched item (or every
//! awaiting item) settles or expires, then writes the snapshot back.
//! `--once` runs a single poll pass so scripts and tests need no timers.

use std::path::Path;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::broadcast;

use crate::cli::commands::{open_store, persist_item};
use crate::errors::Result;
use crate::watch::{DeadlineWatcher, WatchOutcome};

pub async fn run(cwd: Option<&Path>, id: Option<&str>, once: bool, dry_run: bool) -> Result<()> {
    let (root, config, store) = open_store(cwd)?;
    let watcher = DeadlineWatcher::new(
        store.clone(),
        Duration::from_secs(config.poll_interval_seconds.max(1)),
    );

    if once {
        match id {
            Some(id) => match watcher.poll_item(id)? {
                Some(WatchOutcome::Expired) => println!("{} expired", id),
                Some(WatchOutcome::Settled(status)) => println!("{} settled: {}", id, status),
                Some(WatchOutcome::Cancelled) | None => println!("{} still awaiting", id),
            },
            None => {
                for expired in store.sweep_expired(Utc::now()) {
                    println!("{} expired", expired);
                }
            }
        }
    } else {
        // The sender stays alive for the lifetime of the watch; ctrl-c
        // ends the process and the snapshot simply reflects the last
        // completed pass.
        let (_cancel_tx, cancel_rx) = broadcast::channel(1);
        match id {
            Some(id) => {
                let outcome = watcher.watch_item(id, cancel_rx).await?;
                match outcome {
                    WatchOutcome::Expired => println!("{} expired", id),
                    WatchOutcome::Settled(status) => println!("{} settled: {}", id, status),
                    WatchOutcome::Cancelled => {}
                }
            }
            None => {
                for expired in watcher.watch_all(cancel_rx).await? {
                    println!("{} expired", expired);
                }
            }
        }
    }

    for item in store.snapshot() {
        persist_item(&root, &item, dry_run)?;
    }
    Ok(())
}
