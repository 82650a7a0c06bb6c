//! Show command - Show one item with its deadline derivation

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cli::commands::{format_remaining, open_store, status_glyph, JsonOut};
use crate::domain::{is_expired, remaining, verification_deadline};
use crate::errors::Result;
use crate::schemas::WonItem;

/// Item plus the clock values derived for display
#[derive(Serialize)]
struct ItemView {
    #[serde(flatten)]
    item: WonItem,
    deadline: DateTime<Utc>,
    remaining_seconds: i64,
    deadline_passed: bool,
}

/// Show details of a specific item
pub async fn run(cwd: Option<&Path>, id: &str, json: bool) -> Result<()> {
    let (_root, _config, store) = open_store(cwd)?;
    let item = store.get(id)?;

    let now = Utc::now();
    let deadline = verification_deadline(item.won_at);
    let left = remaining(item.won_at, now);

    if json {
        let view = ItemView {
            deadline,
            remaining_seconds: left.num_seconds(),
            deadline_passed: is_expired(item.won_at, now),
            item,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: view
            })?
        );
        return Ok(());
    }

    println!("{} {}  {}", status_glyph(item.status), item.id, item.name);
    println!("  status:    {}", item.status);
    println!("  price:     {}", item.win_price);
    println!("  seller:    {}", item.seller.name);
    if let Some(phone) = &item.seller.phone {
        println!("  phone:     {}", phone);
    }
    if let Some(email) = &item.seller.email {
        println!("  email:     {}", email);
    }
    println!("  won at:    {}", item.won_at.format("%Y-%m-%d %H:%M:%S UTC"));
    println!("  deadline:  {}", deadline.format("%Y-%m-%d %H:%M:%S UTC"));
    println!("  remaining: {}", format_remaining(left));
    Ok(())
}
