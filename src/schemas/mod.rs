//! Schema types for gavel

mod config;
mod item;

pub use config::Config;
pub use item::{Seller, VerificationStatus, WonItem};
