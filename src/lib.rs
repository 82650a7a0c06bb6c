//! Gavel - track auction-won items through buyer verification and deadline expiry
//!
//! This library provides the core functionality for the gavel CLI, including:
//! - Schema definitions for won items, sellers, and config
//! - Domain logic for the verification state machine and deadline clock
//! - An in-memory item store that is the sole status writer
//! - File system utilities for reading/writing JSON snapshots
//! - The dispute-sink boundary and the deadline watcher

pub mod cli;
pub mod config;
pub mod dispute;
pub mod domain;
pub mod errors;
pub mod fs;
pub mod schemas;
pub mod store;
pub mod watch;

// Re-export commonly used types
pub use errors::{GavelError, Result};
pub use schemas::{Config, Seller, VerificationStatus, WonItem};
pub use store::{StatusFilter, WonItemStore};
