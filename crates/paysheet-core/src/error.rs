//! # Bridge Error Types
//!
//! Typed error handling for the payment-sheet bridge.
//! All bridge operations return `Result<T, BridgeError>`.
//!
//! Malformed input never aborts the process: every validation failure is a
//! per-call error delivered through the normal reply path.

use thiserror::Error;

/// Core error type for all bridge operations
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Method name not recognized by the channel router
    #[error("Unsupported method: {method}")]
    UnsupportedMethod { method: String },

    /// Argument bag has the wrong shape (not a map, wrong value type, ...)
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Required key absent from the argument bag
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Item price did not parse as a decimal amount
    #[error("Invalid price for item {index}: {value:?}")]
    InvalidPrice { index: usize, value: String },

    /// A payment session is already in flight; one session at a time
    #[error("A payment session is already in progress")]
    SessionInProgress,

    /// Platform sheet could not be presented
    #[error("Payment sheet presentation failed: {0}")]
    Presentation(String),

    /// Session ended without a reply ever being delivered
    #[error("Payment session ended without delivering a reply")]
    ReplyDropped,
}

impl BridgeError {
    /// Returns true if this error is the caller's fault (bad request data)
    pub fn is_invalid_request(&self) -> bool {
        matches!(
            self,
            BridgeError::UnsupportedMethod { .. }
                | BridgeError::InvalidArguments(_)
                | BridgeError::MissingField { .. }
                | BridgeError::InvalidPrice { .. }
        )
    }
}

/// Result type alias for bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;
