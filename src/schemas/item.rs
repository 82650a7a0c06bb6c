//! WonItem schema - a product won at auction, pending buyer verification

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Verification status for a won item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    /// Initial status - the 24-hour verification window is running
    AwaitingVerification,
    /// Buyer confirmed coordination with the seller; awaiting receipt
    ContactVerified,
    /// Buyer confirmed physical receipt (terminal)
    Received,
    /// Verification deadline passed without buyer action (terminal)
    Expired,
}

impl std::fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerificationStatus::AwaitingVerification => write!(f, "awaiting_verification"),
            VerificationStatus::ContactVerified => write!(f, "contact_verified"),
            VerificationStatus::Received => write!(f, "received"),
            VerificationStatus::Expired => write!(f, "expired"),
        }
    }
}

impl std::str::FromStr for VerificationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "awaiting_verification" => Ok(VerificationStatus::AwaitingVerification),
            "contact_verified" => Ok(VerificationStatus::ContactVerified),
            "received" => Ok(VerificationStatus::Received),
            "expired" => Ok(VerificationStatus::Expired),
            _ => Err(format!("Unknown verification status: {}", s)),
        }
    }
}

/// Seller contact info, supplied by the auction-closing process.
///
/// Read-only: nothing in this crate mutates it after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    /// Display name of the seller
    pub name: String,

    /// Contact phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Contact email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Seller {
    /// Create a seller with name only
    pub fn named(name: impl Into<String>) -> Self {
        Seller {
            name: name.into(),
            phone: None,
            email: None,
        }
    }
}

/// A product a user has won at auction, now pending buyer-side confirmation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WonItem {
    /// Schema version for forward compatibility
    pub schema_version: u32,

    /// Unique identifier for the item
    pub id: String,

    /// Human-readable product name
    pub name: String,

    /// Winning price in integer currency units
    pub win_price: u64,

    /// Timestamp of the auction win; set once at creation, never changed.
    /// The verification deadline derives from this value alone.
    pub won_at: DateTime<Utc>,

    /// Current verification status
    pub status: VerificationStatus,

    /// Seller contact info
    pub seller: Seller,

    /// Timestamp of the last status write
    pub updated_at: DateTime<Utc>,
}

impl WonItem {
    /// Create a new won item in `AwaitingVerification`.
    ///
    /// `won_at` comes from the auction-closing process; price validation
    /// happened upstream when the bid resolved.
    pub fn new(
        id: String,
        name: String,
        win_price: u64,
        seller: Seller,
        won_at: DateTime<Utc>,
    ) -> Self {
        WonItem {
            schema_version: 1,
            id,
            name,
            win_price,
            won_at,
            status: VerificationStatus::AwaitingVerification,
            seller,
            updated_at: won_at,
        }
    }

    /// Return a new item with the given status, stamping `updated_at`.
    ///
    /// `won_at` is left untouched; only the status writer calls this.
    pub fn with_status(mut self, status: VerificationStatus, now: DateTime<Utc>) -> Self {
        self.status = status;
        self.updated_at = now;
        self
    }
}
