//! Deadline clock - pure verification-deadline arithmetic
//!
//! Stateless functions of two timestamps. No timer lives here; polling
//! belongs to the watcher and whatever surface displays the countdown.

use chrono::{DateTime, Duration, Utc};

/// Hours a buyer has to verify after winning.
///
/// Fixed for every item; never recomputed or extended once an item is won.
pub const VERIFICATION_DEADLINE_HOURS: i64 = 24;

/// The verification deadline for an item won at `won_at`.
pub fn verification_deadline(won_at: DateTime<Utc>) -> DateTime<Utc> {
    won_at + Duration::hours(VERIFICATION_DEADLINE_HOURS)
}

/// Time left until the verification deadline, clamped at zero.
pub fn remaining(won_at: DateTime<Utc>, now: DateTime<Utc>) -> Duration {
    (verification_deadline(won_at) - now).max(Duration::zero())
}

/// Whether the verification deadline has passed at `now`.
///
/// True exactly when `remaining` hits zero, so an item is expired at the
/// deadline instant itself, not one tick after.
pub fn is_expired(won_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    remaining(won_at, now) == Duration::zero()
}
