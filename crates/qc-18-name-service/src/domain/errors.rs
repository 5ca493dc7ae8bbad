//! # Domain Errors
//!
//! Error taxonomy for the Name Service. Every variant maps to a stable
//! classification string via [`NameServiceError::code`], which is what the
//! query router and transaction handlers surface to callers.

use serde::{Deserialize, Serialize};
use shared_types::CoinError;
use thiserror::Error;

/// Name Service error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameServiceError {
    /// Malformed request or missing required field.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Domain does not exist.
    #[error("Domain not found: {name}")]
    DomainNotFound { name: String },

    /// Account does not exist.
    #[error("Account not found: {name}*{domain}")]
    AccountNotFound { domain: String, name: String },

    /// Requested page starts beyond the available data.
    #[error("Page {page} out of range: {total} results at {per_page} per page")]
    OutOfRange {
        page: usize,
        per_page: usize,
        total: usize,
    },

    /// Fee payer cannot cover the fee.
    #[error("Insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: String, available: String },

    /// The account index lists a key whose record is missing.
    #[error("Index inconsistency: key {key:?} indexed under {domain} has no record")]
    InternalConsistency { domain: String, key: String },

    /// No handler matches the query path.
    #[error("Unknown request: {0}")]
    UnknownRequest(String),

    /// Fee schedule failed validation.
    #[error("Invalid fee schedule: {0}")]
    InvalidFeeSchedule(String),

    /// Response encoding failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Storage collaborator failure.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Coin arithmetic failure other than insufficient funds.
    #[error("Coin error: {0}")]
    Coin(#[from] CoinError),
}

impl NameServiceError {
    /// Stable classification string.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) => "invalid_request",
            Self::DomainNotFound { .. } | Self::AccountNotFound { .. } => "not_found",
            Self::OutOfRange { .. } => "out_of_range",
            Self::InsufficientFunds { .. } => "insufficient_funds",
            Self::InternalConsistency { .. } => "internal_consistency",
            Self::UnknownRequest(_) => "unknown_request",
            Self::InvalidFeeSchedule(_) => "invalid_fee_schedule",
            Self::Serialization(_) => "serialization",
            Self::Storage(_) => "storage",
            Self::Coin(_) => "invalid_coin",
        }
    }

    /// True for errors that indicate a defect rather than a bad request.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::InternalConsistency { .. } | Self::Serialization(_) | Self::Storage(_)
        )
    }
}

impl From<serde_json::Error> for NameServiceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Serializable error returned to query callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
}

impl From<&NameServiceError> for ErrorPayload {
    fn from(err: &NameServiceError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<NameServiceError> for ErrorPayload {
    fn from(err: NameServiceError) -> Self {
        Self::from(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_codes_share_classification() {
        let domain = NameServiceError::DomainNotFound {
            name: "alice".to_string(),
        };
        let account = NameServiceError::AccountNotFound {
            domain: "alice".to_string(),
            name: "a1".to_string(),
        };
        assert_eq!(domain.code(), "not_found");
        assert_eq!(account.code(), "not_found");
    }

    #[test]
    fn test_internal_consistency_is_not_not_found() {
        let err = NameServiceError::InternalConsistency {
            domain: "alice".to_string(),
            key: "a1".to_string(),
        };
        assert_eq!(err.code(), "internal_consistency");
        assert!(err.is_internal());
    }

    #[test]
    fn test_out_of_range_display() {
        let err = NameServiceError::OutOfRange {
            page: 4,
            per_page: 2,
            total: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("Page 4"));
        assert!(msg.contains("5 results"));
    }

    #[test]
    fn test_error_payload_from() {
        let err = NameServiceError::InvalidRequest("empty domain name".to_string());
        let payload: ErrorPayload = err.into();
        assert_eq!(payload.code, "invalid_request");
        assert!(payload.message.contains("empty domain name"));
    }

    #[test]
    fn test_coin_error_converts() {
        let err: NameServiceError = CoinError::DenomMismatch {
            left: "tiov".to_string(),
            right: "uatom".to_string(),
        }
        .into();
        assert_eq!(err.code(), "invalid_coin");
    }
}
