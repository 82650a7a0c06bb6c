//! State transition guards
//!
//! Pure functions applying verification-lifecycle transitions to won items.
//! None of them mutate their input; each returns a new item for the store
//! (the sole status writer) to write back, or a typed error.

use chrono::{DateTime, Utc};

use crate::dispute::DisputeSink;
use crate::errors::{GavelError, Result};
use crate::schemas::{VerificationStatus, WonItem};

use super::deadline::is_expired;

fn illegal(item: &WonItem, event: &str, reason: &str) -> GavelError {
    GavelError::IllegalTransition {
        id: item.id.clone(),
        from: item.status,
        event: event.to_string(),
        reason: reason.to_string(),
    }
}

/// Buyer confirms coordination with the seller on shipping.
///
/// Rejected once the verification deadline has passed, even if no expiry
/// has been recorded yet: a race between the buyer and the clock resolves
/// in the clock's favor.
pub fn verify_contact(item: &WonItem, now: DateTime<Utc>) -> Result<WonItem> {
    if item.status != VerificationStatus::AwaitingVerification {
        return Err(illegal(item, "verify_contact", "expected awaiting_verification"));
    }
    if is_expired(item.won_at, now) {
        return Err(illegal(item, "verify_contact", "verification deadline has passed"));
    }
    Ok(item
        .clone()
        .with_status(VerificationStatus::ContactVerified, now))
}

/// Buyer confirms physical receipt of the item.
pub fn confirm_received(item: &WonItem, now: DateTime<Utc>) -> Result<WonItem> {
    if item.status != VerificationStatus::ContactVerified {
        return Err(illegal(item, "confirm_received", "expected contact_verified"));
    }
    Ok(item.clone().with_status(VerificationStatus::Received, now))
}

/// Deadline trigger: move an awaiting item to expired.
///
/// The deadline is not re-checked here; whoever calls this has already
/// observed it pass, and the call itself is the trigger. Calling it on an
/// already-expired item is a no-op success, so a polling clock and a
/// manual sweep may both fire without an error.
pub fn expire(item: &WonItem, now: DateTime<Utc>) -> Result<WonItem> {
    match item.status {
        VerificationStatus::Expired => Ok(item.clone()),
        VerificationStatus::AwaitingVerification => {
            Ok(item.clone().with_status(VerificationStatus::Expired, now))
        }
        _ => Err(illegal(item, "expire", "expected awaiting_verification")),
    }
}

/// Forward a problem report on a contact-verified item to the dispute
/// collaborator. Status is unchanged either way; dispute handling is an
/// external process.
pub fn report_issue(item: &WonItem, reason: &str, sink: &dyn DisputeSink) -> Result<()> {
    if item.status != VerificationStatus::ContactVerified {
        return Err(illegal(item, "report_issue", "expected contact_verified"));
    }
    sink.raise(item, reason)
}
