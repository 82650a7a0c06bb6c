//! Error types for gavel
//!
//! Each error type has a corresponding error code for programmatic handling.

use thiserror::Error;

use crate::schemas::VerificationStatus;

/// Result type alias for gavel operations
pub type Result<T> = std::result::Result<T, GavelError>;

/// Main error type for all gavel operations
#[derive(Debug, Error)]
pub enum GavelError {
    /// Requested item id does not exist in the store
    #[error("Item not found: {0}")]
    NotFound(String),

    /// The requested operation is not valid for the item's current status
    #[error("Illegal transition for {id}: {event} not allowed from {from}: {reason}")]
    IllegalTransition {
        id: String,
        from: VerificationStatus,
        event: String,
        reason: String,
    },

    /// An item with this id already exists in the store
    #[error("Duplicate item: {0}")]
    DuplicateItem(String),

    /// Unrecognized status name in a filter or argument
    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    /// Data root not found - no .gavel directory
    #[error("Data root not found: {0}")]
    RepoNotFound(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Dispute sink failed to accept a report
    #[error("Dispute error: {0}")]
    Dispute(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for GavelError {
    fn from(e: serde_json::Error) -> Self {
        GavelError::InvalidJson(e.to_string())
    }
}

impl GavelError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            GavelError::NotFound(_) => "NOT_FOUND",
            GavelError::IllegalTransition { .. } => "ILLEGAL_TRANSITION",
            GavelError::DuplicateItem(_) => "DUPLICATE_ITEM",
            GavelError::InvalidStatus(_) => "INVALID_STATUS",
            GavelError::RepoNotFound(_) => "REPO_NOT_FOUND",
            GavelError::FileNotFound(_) => "FILE_NOT_FOUND",
            GavelError::InvalidJson(_) => "INVALID_JSON",
            GavelError::ConfigError(_) => "CONFIG_ERROR",
            GavelError::Dispute(_) => "DISPUTE_ERROR",
            GavelError::Io(_) => "IO_ERROR",
        }
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &GavelError) -> i32 {
    match error {
        GavelError::NotFound(_) => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(GavelError::NotFound("w-001".into()).code(), "NOT_FOUND");
        assert_eq!(GavelError::DuplicateItem("w-001".into()).code(), "DUPLICATE_ITEM");
        assert_eq!(GavelError::InvalidStatus("bogus".into()).code(), "INVALID_STATUS");
        assert_eq!(GavelError::RepoNotFound("test".into()).code(), "REPO_NOT_FOUND");
        assert_eq!(GavelError::FileNotFound("test".into()).code(), "FILE_NOT_FOUND");
        assert_eq!(GavelError::InvalidJson("test".into()).code(), "INVALID_JSON");
        assert_eq!(GavelError::ConfigError("test".into()).code(), "CONFIG_ERROR");
        assert_eq!(GavelError::Dispute("test".into()).code(), "DISPUTE_ERROR");
    }

    #[test]
    fn test_illegal_transition_code_and_message() {
        let err = GavelError::IllegalTransition {
            id: "w-001".to_string(),
            from: VerificationStatus::Expired,
            event: "verify_contact".to_string(),
            reason: "terminal status".to_string(),
        };
        assert_eq!(err.code(), "ILLEGAL_TRANSITION");
        let msg = err.to_string();
        assert!(msg.contains("w-001"));
        assert!(msg.contains("verify_contact"));
        assert!(msg.contains("expired"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(to_exit_code(&GavelError::NotFound("w-001".into())), 2);
        assert_eq!(
            to_exit_code(&GavelError::IllegalTransition {
                id: "w-001".to_string(),
                from: VerificationStatus::Received,
                event: "expire".to_string(),
                reason: "terminal status".to_string(),
            }),
            1
        );
        assert_eq!(to_exit_code(&GavelError::InvalidJson("test".into())), 1);
    }
}
