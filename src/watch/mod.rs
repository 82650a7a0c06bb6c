//! Deadline watcher - the polling collaborator around the pure clock
//!
//! Timers live here and only here; the domain stays free of them. A
//! watcher ticks at a bounded interval while its item is awaiting
//! verification, fires `expire` through the store exactly once when the
//! deadline passes, and stops as soon as the item settles or the watch is
//! cancelled.

use std::time::Duration as StdDuration;

use chrono::Utc;
use tokio::sync::broadcast;

use crate::domain::remaining;
use crate::errors::Result;
use crate::schemas::VerificationStatus;
use crate::store::{StatusFilter, WonItemStore};

/// Why a watch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchOutcome {
    /// The deadline passed and this watcher recorded the expiry.
    Expired,
    /// The item left `AwaitingVerification` through a buyer action.
    Settled(VerificationStatus),
    /// The observer went away before the item settled.
    Cancelled,
}

/// Watches won items for deadline expiry.
#[derive(Clone)]
pub struct DeadlineWatcher {
    store: WonItemStore,
    interval: StdDuration,
}

impl DeadlineWatcher {
    /// Create a watcher ticking at the given interval (config default: 1s).
    pub fn new(store: WonItemStore, interval: StdDuration) -> Self {
        DeadlineWatcher { store, interval }
    }

    /// Poll one item until it settles, expires, or the watch is cancelled.
    ///
    /// The first tick fires immediately, so an already-due item expires
    /// without waiting a full interval.
    pub async fn watch_item(
        &self,
        id: &str,
        mut cancel: broadcast::Receiver<()>,
    ) -> Result<WatchOutcome> {
        let mut ticker = tokio::time::interval(self.interval);
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if let Some(outcome) = self.poll_item(id)? {
                        return Ok(outcome);
                    }
                }
                _ = cancel.recv() => {
                    tracing::debug!(id = %id, "Watch cancelled");
                    return Ok(WatchOutcome::Cancelled);
                }
            }
        }
    }

    /// One tick of the poll for one item.
    ///
    /// Returns `None` while the item is still awaiting with time left.
    pub fn poll_item(&self, id: &str) -> Result<Option<WatchOutcome>> {
        let item = self.store.get(id)?;

        if item.status != VerificationStatus::AwaitingVerification {
            tracing::debug!(id = %id, status = %item.status, "Item settled; watch ends");
            return Ok(Some(WatchOutcome::Settled(item.status)));
        }

        let now = Utc::now();
        let left = remaining(item.won_at, now);
        if left.is_zero() {
            // Idempotent through the store, so a racing sweep is harmless.
            self.store.expire(id, now)?;
            return Ok(Some(WatchOutcome::Expired));
        }

        tracing::debug!(id = %id, remaining_secs = left.num_seconds(), "Deadline tick");
        Ok(None)
    }

    /// Poll the whole store until no item is left awaiting verification,
    /// or the watch is cancelled.
    ///
    /// Returns the ids expired while watching.
    pub async fn watch_all(&self, mut cancel: broadcast::Receiver<()>) -> Result<Vec<String>> {
        let mut expired = Vec::new();
        let mut ticker = tokio::time::interval(self.interval);
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    expired.extend(self.store.sweep_expired(Utc::now()));
                    let awaiting = self
                        .store
                        .list(StatusFilter::Status(VerificationStatus::AwaitingVerification));
                    if awaiting.is_empty() {
                        return Ok(expired);
                    }
                }
                _ = cancel.recv() => {
                    tracing::debug!("Store watch cancelled");
                    return Ok(expired);
                }
            }
        }
    }
}
