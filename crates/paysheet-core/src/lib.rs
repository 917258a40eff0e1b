//! # paysheet-core
//!
//! Core types and validation for the paysheet bridge.
//!
//! This crate provides:
//! - `PaymentRequest` and `SummaryItem` built from the host argument bag
//! - `PaymentResponse` for the single token-or-error reply
//! - `encode_token` for lossless payment token encoding
//! - `BridgeError` for typed error handling
//!
//! ## Example
//!
//! ```rust
//! use paysheet_core::{PaymentRequest, PaymentResponse};
//! use serde_json::json;
//!
//! let arguments = json!({
//!     "merchantIdentifier": "merchant.example",
//!     "currencyCode": "USD",
//!     "countryCode": "US",
//!     "items": [{ "name": "Coffee", "price": "3.50" }]
//! });
//!
//! let request = PaymentRequest::from_arguments(&arguments).unwrap();
//! assert_eq!(request.item_count(), 1);
//!
//! let reply = PaymentResponse::authorized("opaque-token");
//! assert!(reply.is_authorized());
//! ```

pub mod error;
pub mod outcome;
pub mod request;

// Re-exports for convenience
pub use error::{BridgeError, BridgeResult};
pub use outcome::{encode_token, PaymentResponse, CANCELLED_ERROR};
pub use request::{CardNetwork, MerchantCapability, PaymentRequest, SummaryItem};
