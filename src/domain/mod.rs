//! Domain logic for the verification lifecycle
//!
//! Everything here is a pure function over explicit timestamps; timers and
//! persistence live with the callers.

mod deadline;
mod states;
mod transitions;


pub use deadline::{
    is_expired, remaining, verification_deadline, VERIFICATION_DEADLINE_HOURS,
};
pub use states::{
    allowed_targets, can_transition, is_terminal_status, VERIFICATION_STATUSES,
};
pub use transitions::{confirm_received, expire, report_issue, verify_contact};
