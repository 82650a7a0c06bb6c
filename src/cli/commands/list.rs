//! List command - List won items with optional status filtering

use std::path::Path;

use chrono::Utc;

use crate::cli::commands::{format_remaining, open_store, status_glyph, JsonOut};
use crate::domain::remaining;
use crate::errors::Result;
use crate::schemas::VerificationStatus;
use crate::store::StatusFilter;

/// List items, newest win first
pub async fn run(cwd: Option<&Path>, json: bool, status: Option<&str>) -> Result<()> {
    let (_root, _config, store) = open_store(cwd)?;

    let filter = match status {
        Some(s) => s.parse::<StatusFilter>()?,
        None => StatusFilter::All,
    };
    let items = store.list(filter);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: &items
            })?
        );
        return Ok(());
    }

    if items.is_empty() {
        println!("No items");
        return Ok(());
    }

    let now = Utc::now();
    for item in &items {
        let countdown = match item.status {
            VerificationStatus::AwaitingVerification => {
                format!("  ({} left)", format_remaining(remaining(item.won_at, now)))
            }
            _ => String::new(),
        };
        println!(
            "{} {}  {:<22} {:>8}  {}{}",
            status_glyph(item.status),
            item.id,
            item.status,
            item.win_price,
            item.name,
            countdown
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::{init, win};
    use crate::errors::GavelError;
    use tempfile::TempDir;

    async fn setup_with_items() -> TempDir {
        let temp = TempDir::new().unwrap();
        init::run(Some(temp.path()), false, false).await.unwrap();
        for id in ["w-001", "w-002"] {
            win::run(
                Some(temp.path()),
                "Lot",
                100,
                "seller",
                None,
                None,
                Some(id),
                false,
            )
            .await
            .unwrap();
        }
        temp
    }

    #[tokio::test]
    async fn test_list_runs_over_snapshot() {
        let temp = setup_with_items().await;
        run(Some(temp.path()), false, None).await.unwrap();
        run(Some(temp.path()), true, Some("awaiting_verification"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_list_rejects_unknown_status() {
        let temp = setup_with_items().await;
        let err = run(Some(temp.path()), false, Some("bogus"))
            .await
            .unwrap_err();
        assert!(matches!(err, GavelError::InvalidStatus(_)));
    }

    #[tokio::test]
    async fn test_list_without_data_root_fails() {
        let temp = TempDir::new().unwrap();
        let err = run(Some(temp.path()), false, None).await.unwrap_err();
        assert!(matches!(err, GavelError::RepoNotFound(_)));
    }
}
