//! Verification state machine definitions
//!
//! The graph branches once and only moves forward:
//! awaiting_verification → contact_verified → received
//! awaiting_verification → expired
//!
//! received and expired are terminal; nothing ever re-enters
//! awaiting_verification.

use crate::schemas::VerificationStatus;

/// Canonical listing order of verification statuses.
///
/// Used for status summaries, filter help text, and test strategies.
pub const VERIFICATION_STATUSES: &[VerificationStatus] = &[
    VerificationStatus::AwaitingVerification,
    VerificationStatus::ContactVerified,
    VerificationStatus::Received,
    VerificationStatus::Expired,
];

/// The statuses an item may legally move to from `status`.
///
/// This is the source of truth for the transition graph; the guard
/// operations in `transitions` all check against it.
pub fn allowed_targets(status: VerificationStatus) -> &'static [VerificationStatus] {
    match status {
        VerificationStatus::AwaitingVerification => &[
            VerificationStatus::ContactVerified,
            VerificationStatus::Expired,
        ],
        VerificationStatus::ContactVerified => &[VerificationStatus::Received],
        VerificationStatus::Received | VerificationStatus::Expired => &[],
    }
}

/// Check whether a single step from `from` to `to` is on the graph.
pub fn can_transition(from: VerificationStatus, to: VerificationStatus) -> bool {
    allowed_targets(from).contains(&to)
}

/// Check if a status is terminal (received or expired).
pub fn is_terminal_status(status: VerificationStatus) -> bool {
    matches!(
        status,
        VerificationStatus::Received | VerificationStatus::Expired
    )
}
