//! Config schema - Configuration for gavel
//!
//! The verification deadline itself is a fixed domain constant and is
//! deliberately absent here; only the surrounding surface is configurable.

use serde::{Deserialize, Serialize};

/// Main configuration for gavel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Tick interval for the deadline watcher, in seconds
    #[serde(default = "default_poll_interval_seconds")]
    pub poll_interval_seconds: u64,

    /// File name of the dispute log, relative to the .gavel directory
    #[serde(default = "default_dispute_log")]
    pub dispute_log: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_poll_interval_seconds() -> u64 {
    1
}

fn default_dispute_log() -> String {
    "disputes.jsonl".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: 1,
            poll_interval_seconds: 1,
            dispute_log: "disputes.jsonl".to_string(),
        }
    }
}
