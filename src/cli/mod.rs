//! CLI module for gavel
//!
//! Provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Gavel - Track auction-won items through buyer verification and deadline expiry
#[derive(Parser, Debug)]
#[command(name = "gavel")]
#[command(version)]
#[command(about = "Track auction-won items through buyer verification, receipt, and deadline expiry")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Preview operations without writing item files
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Override the working directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a .gavel data directory here
    Init {
        /// Force initialization even if .gavel already exists
        #[arg(long)]
        force: bool,
    },

    /// Record a fresh auction win as an awaiting-verification item
    Win {
        /// Product name
        name: String,

        /// Winning price in integer currency units
        #[arg(long)]
        price: u64,

        /// Seller display name
        #[arg(long)]
        seller: String,

        /// Seller contact phone
        #[arg(long)]
        phone: Option<String>,

        /// Seller contact email
        #[arg(long)]
        email: Option<String>,

        /// Item id (generated from the win timestamp if omitted)
        #[arg(long)]
        id: Option<String>,
    },

    /// List won items, newest win first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Filter by status (awaiting_verification, contact_verified, received, expired, all)
        #[arg(long)]
        status: Option<String>,
    },

    /// Show one item with its deadline and remaining time
    Show {
        /// Item ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show per-status counts and the next upcoming deadline
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Confirm seller contact for an awaiting item
    Verify {
        /// Item ID
        id: String,
    },

    /// Confirm physical receipt of a contact-verified item
    Receive {
        /// Item ID
        id: String,
    },

    /// Report an issue with a contact-verified item to the dispute log
    Report {
        /// Item ID
        id: String,

        /// Description of the issue
        #[arg(long)]
        reason: String,
    },

    /// Expire every awaiting item whose deadline has passed
    Sweep,

    /// Poll deadlines until the watched items settle or expire
    Watch {
        /// Item ID (watches the whole store if omitted)
        id: Option<String>,

        /// Run a single poll pass instead of looping
        #[arg(long)]
        once: bool,
    },
}
