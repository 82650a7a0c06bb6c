//! Dispute reporting boundary
//!
//! `report_issue` hands a contact-verified item over to an external
//! dispute-handling process. This module owns only the hand-off: a sink
//! trait plus a JSONL log implementation. Item status is never touched
//! from here.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{GavelError, Result};
use crate::schemas::WonItem;

/// External dispute-handling collaborator.
pub trait DisputeSink {
    /// Forward a buyer-reported issue for the given item.
    fn raise(&self, item: &WonItem, reason: &str) -> Result<()>;
}

/// One forwarded report, as written to the dispute log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisputeRecord {
    /// When the report was forwarded
    pub reported_at: DateTime<Utc>,

    /// Item the report concerns
    pub item_id: String,

    /// Product name at the time of the report
    pub item_name: String,

    /// Winning price in integer currency units
    pub win_price: u64,

    /// Seller the buyer is disputing with
    pub seller: String,

    /// Buyer-supplied description of the issue
    pub reason: String,
}

/// Append-only JSONL dispute log, one record per line.
pub struct JsonlDisputeLog {
    path: PathBuf,
}

impl JsonlDisputeLog {
    /// Create a log that appends to the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonlDisputeLog { path: path.into() }
    }

    /// Path of the underlying log file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DisputeSink for JsonlDisputeLog {
    fn raise(&self, item: &WonItem, reason: &str) -> Result<()> {
        let record = DisputeRecord {
            reported_at: Utc::now(),
            item_id: item.id.clone(),
            item_name: item.name.clone(),
            win_price: item.win_price,
            seller: item.seller.name.clone(),
            reason: reason.to_string(),
        };

        let line = serde_json::to_string(&record)
            .map_err(|e| GavelError::Dispute(format!("cannot encode record: {}", e)))?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        file.write_all(b"\n")?;

        tracing::info!(item_id = %item.id, "Dispute forwarded to log");
        Ok(())
    }
}

/// Sink that accepts every report and records nothing.
pub struct NullDisputeSink;

impl DisputeSink for NullDisputeSink {
    fn raise(&self, _item: &WonItem, _reason: &str) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::Seller;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn make_item() -> WonItem {
        WonItem::new(
            "w-001".to_string(),
            "Vintage film camera".to_string(),
            45_000,
            Seller::named("photo-attic"),
            Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_jsonl_log_appends_one_line_per_report() {
        let temp = TempDir::new().unwrap();
        let log = JsonlDisputeLog::new(temp.path().join("disputes.jsonl"));
        let item = make_item();

        log.raise(&item, "box arrived empty").unwrap();
        log.raise(&item, "seller stopped responding").unwrap();

        let content = std::fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: DisputeRecord = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first.item_id, "w-001");
        assert_eq!(first.seller, "photo-attic");
        assert_eq!(first.reason, "box arrived empty");

        let second: DisputeRecord = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second.reason, "seller stopped responding");
    }

    #[test]
    fn test_jsonl_log_creates_parent_dir() {
        let temp = TempDir::new().unwrap();
        let log = JsonlDisputeLog::new(temp.path().join("nested").join("disputes.jsonl"));

        log.raise(&make_item(), "damaged in transit").unwrap();
        assert!(log.path().exists());
    }

    #[test]
    fn test_null_sink_accepts_everything() {
        let sink = NullDisputeSink;
        assert!(sink.raise(&make_item(), "anything").is_ok());
    }
}
