//! Status command - Per-status counts and the next upcoming deadline

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cli::commands::{format_remaining, open_store, status_glyph, JsonOut};
use crate::domain::verification_deadline;
use crate::errors::Result;
use crate::schemas::VerificationStatus;
use crate::store::StatusFilter;

#[derive(Serialize)]
struct StatusCount {
    status: VerificationStatus,
    count: usize,
}

#[derive(Serialize)]
struct NextDeadline {
    id: String,
    deadline: DateTime<Utc>,
}

#[derive(Serialize)]
struct StatusSummary {
    total: usize,
    counts: Vec<StatusCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_deadline: Option<NextDeadline>,
}

/// Show status of all items
pub async fn run(cwd: Option<&Path>, json: bool) -> Result<()> {
    let (_root, _config, store) = open_store(cwd)?;

    let counts: Vec<StatusCount> = store
        .status_counts()
        .into_iter()
        .map(|(status, count)| StatusCount { status, count })
        .collect();

    // Awaiting items are listed newest first, so the last one carries the
    // earliest win and therefore the nearest deadline.
    let next_deadline = store
        .list(StatusFilter::Status(
            VerificationStatus::AwaitingVerification,
        ))
        .last()
        .map(|item| NextDeadline {
            id: item.id.clone(),
            deadline: verification_deadline(item.won_at),
        });

    let summary = StatusSummary {
        total: store.len(),
        counts,
        next_deadline,
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: summary
            })?
        );
        return Ok(());
    }

    println!("{} items", summary.total);
    for entry in &summary.counts {
        println!(
            "  {} {:<22} {}",
            status_glyph(entry.status),
            entry.status,
            entry.count
        );
    }
    if let Some(next) = &summary.next_deadline {
        let left = next.deadline - Utc::now();
        println!(
            "next deadline: {} at {} ({} left)",
            next.id,
            next.deadline.format("%Y-%m-%d %H:%M:%S UTC"),
            format_remaining(left.max(chrono::Duration::zero()))
        );
    }
    Ok(())
}
