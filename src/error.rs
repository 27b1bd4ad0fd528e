//! Error types for the relay datastore
//!
//! A lookup miss is not an error: `get_validator_registration` reports it as
//! `Ok(None)`. The variants below cover backend failures and malformed input
//! at the decoding boundary.

use thiserror::Error;

/// Unified error type for datastore operations
#[derive(Error, Debug)]
pub enum Error {
    // =========================================================================
    // Backend Errors
    // =========================================================================
    #[error("Backend unavailable: {backend}")]
    BackendUnavailable { backend: String },

    #[error("Backend operation failed: {backend} - {operation}: {reason}")]
    BackendOperationFailed {
        backend: String,
        operation: String,
        reason: String,
    },

    // =========================================================================
    // Diagnostics Errors
    // =========================================================================
    #[error("Unknown datastore method: {method}")]
    UnknownMethod { method: String },

    // =========================================================================
    // Parse Errors
    // =========================================================================
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl Error {
    /// Check if this error is transient
    ///
    /// Transient errors come from a backend that may recover on its own.
    pub fn is_transient(&self) -> bool {
        matches!(self, Error::BackendUnavailable { .. })
    }

    /// Check if the failed call is worth retrying
    ///
    /// Retrying is the caller's decision; the datastore never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::BackendUnavailable { .. } | Error::BackendOperationFailed { .. } => true,
            Error::UnknownMethod { .. } | Error::JsonParse(_) => false,
        }
    }
}

/// Result type alias for the datastore
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_retryable() {
        let transient = Error::BackendUnavailable {
            backend: "postgres".into(),
        };
        assert!(transient.is_retryable());
        assert!(transient.is_transient());

        let failed = Error::BackendOperationFailed {
            backend: "postgres".into(),
            operation: "insert".into(),
            reason: "serialization failure".into(),
        };
        assert!(failed.is_retryable());
        assert!(!failed.is_transient());

        let unknown = Error::UnknownMethod {
            method: "DeleteValidatorRegistration".into(),
        };
        assert!(!unknown.is_retryable());
        assert!(!unknown.is_transient());
    }

    #[test]
    fn test_error_display() {
        let err = Error::BackendOperationFailed {
            backend: "redis".into(),
            operation: "HSET".into(),
            reason: "connection reset".into(),
        };
        assert_eq!(
            err.to_string(),
            "Backend operation failed: redis - HSET: connection reset"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u64>("not a number").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::JsonParse(_)));
        assert!(!err.is_retryable());
    }
}
