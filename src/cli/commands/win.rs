//! Win command - admit a fresh auction win
//!
//! This is the auction-closing boundary: the moment the hammer falls, the
//! item enters the store as awaiting verification with its 24-hour window
//! already running. Bid and payment validation happened upstream.

use std::path::Path;

use chrono::Utc;

use crate::cli::commands::{open_store, persist_item};
use crate::domain::verification_deadline;
use crate::errors::Result;
use crate::schemas::{Seller, WonItem};

#[allow(clippy::too_many_arguments)]
pub async fn run(
    cwd: Option<&Path>,
    name: &str,
    price: u64,
    seller: &str,
    phone: Option<&str>,
    email: Option<&str>,
    id: Option<&str>,
    dry_run: bool,
) -> Result<()> {
    let (root, _config, store) = open_store(cwd)?;

    let won_at = Utc::now();
    let id = match id {
        Some(id) => id.to_string(),
        None => format!("w-{}", won_at.timestamp_millis()),
    };

    let seller = Seller {
        name: seller.to_string(),
        phone: phone.map(str::to_string),
        email: email.map(str::to_string),
    };
    let item = WonItem::new(id.clone(), name.to_string(), price, seller, won_at);

    store.insert(item.clone())?;
    persist_item(&root, &item, dry_run)?;

    tracing::info!(id = %id, price, "Auction win recorded");
    println!(
        "{}  verify by {}",
        id,
        verification_deadline(won_at).format("%Y-%m-%d %H:%M:%S UTC")
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::init;
    use crate::errors::GavelError;
    use crate::fs;
    use crate::schemas::VerificationStatus;
    use tempfile::TempDir;

    async fn setup() -> TempDir {
        let temp = TempDir::new().unwrap();
        init::run(Some(temp.path()), false, false).await.unwrap();
        temp
    }

    #[tokio::test]
    async fn test_win_writes_awaiting_item() {
        let temp = setup().await;

        run(
            Some(temp.path()),
            "Vintage film camera",
            45_000,
            "photo-attic",
            None,
            Some("attic@example.com"),
            Some("w-001"),
            false,
        )
        .await
        .unwrap();

        let item = fs::read_item(temp.path(), "w-001").unwrap();
        assert_eq!(item.status, VerificationStatus::AwaitingVerification);
        assert_eq!(item.win_price, 45_000);
        assert_eq!(item.seller.email.as_deref(), Some("attic@example.com"));
    }

    #[tokio::test]
    async fn test_win_duplicate_id_rejected() {
        let temp = setup().await;

        for expected_err in [false, true] {
            let result = run(
                Some(temp.path()),
                "Lot",
                100,
                "seller",
                None,
                None,
                Some("w-001"),
                false,
            )
            .await;
            if expected_err {
                assert!(matches!(
                    result.unwrap_err(),
                    GavelError::DuplicateItem(_)
                ));
            } else {
                result.unwrap();
            }
        }
    }

    #[tokio::test]
    async fn test_win_dry_run_writes_no_file() {
        let temp = setup().await;

        run(
            Some(temp.path()),
            "Lot",
            100,
            "seller",
            None,
            None,
            Some("w-001"),
            true,
        )
        .await
        .unwrap();

        assert!(fs::read_item(temp.path(), "w-001").is_err());
    }
}
