//! # Payment Outcomes
//!
//! The single reply value a payment session delivers back to the host
//! application, plus the token encoding rules.

use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// Error message reported when the sheet finishes without an authorization
pub const CANCELLED_ERROR: &str = "Can't process payment";

/// The reply delivered for every `requestPayment` call.
///
/// Exactly one of `token` / `error` is set: an authorized payment carries
/// the opaque token, a cancelled or declined flow carries the error text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentResponse {
    pub token: Option<String>,
    pub error: Option<String>,
}

impl PaymentResponse {
    /// Successful authorization with an encoded payment token
    pub fn authorized(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            error: None,
        }
    }

    /// Sheet dismissed without an authorization
    pub fn cancelled() -> Self {
        Self {
            token: None,
            error: Some(CANCELLED_ERROR.to_string()),
        }
    }

    pub fn is_authorized(&self) -> bool {
        self.token.is_some() && self.error.is_none()
    }
}

/// Encode raw platform payment data as token text.
///
/// Valid UTF-8 passes through unchanged; anything else is base64-encoded so
/// binary token data is never silently lost.
pub fn encode_token(payment_data: &[u8]) -> String {
    match std::str::from_utf8(payment_data) {
        Ok(text) => text.to_string(),
        Err(_) => base64::engine::general_purpose::STANDARD.encode(payment_data),
    }
}
