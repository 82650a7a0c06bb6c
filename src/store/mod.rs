//! WonItemStore - authoritative collection of won items
//!
//! The only place a status is physically written. Every mutation routes
//! through `apply` under one mutex, so a deadline trigger and a buyer
//! action racing on the same item are serialized. The store is purely
//! in-memory; the CLI loads it from and persists it to item files around
//! each command.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use crate::dispute::DisputeSink;
use crate::domain::{self, is_expired, VERIFICATION_STATUSES};
use crate::errors::{GavelError, Result};
use crate::schemas::{VerificationStatus, WonItem};

/// Filter for `list`: everything, or one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Status(VerificationStatus),
}

impl std::str::FromStr for StatusFilter {
    type Err = GavelError;

    fn from_str(s: &str) -> Result<Self> {
        if s == "all" {
            return Ok(StatusFilter::All);
        }
        s.parse::<VerificationStatus>()
            .map(StatusFilter::Status)
            .map_err(|_| GavelError::InvalidStatus(s.to_string()))
    }
}

/// Shared in-memory store of won items.
///
/// Cloning produces another handle to the same underlying map.
#[derive(Clone, Default)]
pub struct WonItemStore {
    inner: Arc<Mutex<HashMap<String, WonItem>>>,
}

impl WonItemStore {
    pub fn new() -> Self {
        WonItemStore::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, WonItem>> {
        // Poisoning can only happen if a panic escaped a locked section;
        // every locked section here is panic-free over plain data.
        self.inner.lock().expect("won-item store mutex poisoned")
    }

    /// Admit a new item from the auction-closing process.
    ///
    /// Each auction win creates its item exactly once; a duplicate id is
    /// rejected rather than upserted so a retry can never resurrect or
    /// rewind an existing item.
    pub fn insert(&self, item: WonItem) -> Result<()> {
        let mut items = self.lock();
        if items.contains_key(&item.id) {
            return Err(GavelError::DuplicateItem(item.id));
        }
        tracing::debug!(id = %item.id, status = %item.status, "Item admitted to store");
        items.insert(item.id.clone(), item);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<WonItem> {
        self.lock()
            .get(id)
            .cloned()
            .ok_or_else(|| GavelError::NotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// List items matching the filter, newest win first.
    ///
    /// Order is deterministic: descending `won_at`, ties broken by
    /// ascending id.
    pub fn list(&self, filter: StatusFilter) -> Vec<WonItem> {
        let items = self.lock();
        let mut out: Vec<WonItem> = items
            .values()
            .filter(|item| match filter {
                StatusFilter::All => true,
                StatusFilter::Status(status) => item.status == status,
            })
            .cloned()
            .collect();
        out.sort_by(|a, b| b.won_at.cmp(&a.won_at).then_with(|| a.id.cmp(&b.id)));
        out
    }

    /// All items in the deterministic `list` order, for persistence.
    pub fn snapshot(&self) -> Vec<WonItem> {
        self.list(StatusFilter::All)
    }

    /// Count of items per status, in canonical status order.
    pub fn status_counts(&self) -> Vec<(VerificationStatus, usize)> {
        let items = self.lock();
        VERIFICATION_STATUSES
            .iter()
            .map(|&status| {
                let count = items.values().filter(|i| i.status == status).count();
                (status, count)
            })
            .collect()
    }

    /// The sole write path: look up the item, run a guard operation on it,
    /// and write the result back if the guard accepted.
    pub fn apply<F>(&self, id: &str, f: F) -> Result<WonItem>
    where
        F: FnOnce(&WonItem) -> Result<WonItem>,
    {
        let mut items = self.lock();
        let item = items
            .get(id)
            .ok_or_else(|| GavelError::NotFound(id.to_string()))?;
        let updated = f(item)?;
        tracing::info!(id = %id, status = %updated.status, "Status written");
        items.insert(id.to_string(), updated.clone());
        Ok(updated)
    }

    /// Buyer confirms seller contact.
    ///
    /// Expiry wins the race: when the deadline has already passed at `now`
    /// and the item is still awaiting, the expiry is recorded inside the
    /// same locked section and the verify attempt is rejected, exactly as
    /// if the clock trigger had run first.
    pub fn verify_contact(&self, id: &str, now: DateTime<Utc>) -> Result<WonItem> {
        let mut items = self.lock();
        let item = items
            .get(id)
            .ok_or_else(|| GavelError::NotFound(id.to_string()))?;

        if item.status == VerificationStatus::AwaitingVerification && is_expired(item.won_at, now) {
            let expired = domain::expire(item, now)?;
            tracing::info!(id = %id, "Deadline beat verify_contact; item expired");
            let err = GavelError::IllegalTransition {
                id: id.to_string(),
                from: item.status,
                event: "verify_contact".to_string(),
                reason: "verification deadline has passed".to_string(),
            };
            items.insert(id.to_string(), expired);
            return Err(err);
        }

        let updated = domain::verify_contact(item, now)?;
        tracing::info!(id = %id, status = %updated.status, "Status written");
        items.insert(id.to_string(), updated.clone());
        Ok(updated)
    }

    /// Buyer confirms physical receipt.
    pub fn confirm_received(&self, id: &str, now: DateTime<Utc>) -> Result<WonItem> {
        self.apply(id, |item| domain::confirm_received(item, now))
    }

    /// Deadline trigger; idempotent on an already-expired item.
    pub fn expire(&self, id: &str, now: DateTime<Utc>) -> Result<WonItem> {
        self.apply(id, |item| domain::expire(item, now))
    }

    /// Forward a buyer-reported issue to the dispute collaborator.
    ///
    /// Read-only: status is never touched from here.
    pub fn report_issue(&self, id: &str, reason: &str, sink: &dyn DisputeSink) -> Result<()> {
        let item = self.get(id)?;
        domain::report_issue(&item, reason, sink)
    }

    /// Expire every awaiting item whose deadline has passed at `now`.
    ///
    /// Returns the ids that expired in this pass, in the deterministic
    /// `list` order. Used by the watcher and the `sweep` command.
    pub fn sweep_expired(&self, now: DateTime<Utc>) -> Vec<String> {
        let mut items = self.lock();
        let mut due: Vec<&WonItem> = items
            .values()
            .filter(|item| {
                item.status == VerificationStatus::AwaitingVerification
                    && is_expired(item.won_at, now)
            })
            .collect();
        due.sort_by(|a, b| b.won_at.cmp(&a.won_at).then_with(|| a.id.cmp(&b.id)));

        let expired: Vec<WonItem> = due
            .into_iter()
            .filter_map(|item| domain::expire(item, now).ok())
            .collect();

        let ids: Vec<String> = expired.iter().map(|item| item.id.clone()).collect();
        for item in expired {
            tracing::info!(id = %item.id, "Deadline passed; item expired");
            items.insert(item.id.clone(), item);
        }
        ids
    }
}
