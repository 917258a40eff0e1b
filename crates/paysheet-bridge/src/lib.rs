//! # paysheet-bridge
//!
//! Request/response bridge between a host application and a native
//! payment-authorization sheet (Apple Pay style).
//!
//! This crate provides:
//! - `PaymentChannel` routing the two channel operations
//! - `SessionRegistry` enforcing one in-flight payment session
//! - `SessionEvents` adapting authorize/finish callbacks into one reply
//! - `AuthorizationSheet` trait seam for the platform sheet
//!
//! ## Example
//!
//! ```rust,ignore
//! use paysheet_bridge::PaymentChannel;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let channel = PaymentChannel::new(Arc::new(platform_sheet));
//!
//! let reply = channel
//!     .handle("requestPayment", json!({
//!         "merchantIdentifier": "merchant.example",
//!         "currencyCode": "USD",
//!         "countryCode": "US",
//!         "items": [{ "name": "Coffee", "price": "3.50" }]
//!     }))
//!     .await?;
//!
//! // reply: { "token": "...", "error": null }
//! ```

pub mod channel;
pub mod platform;
pub mod session;

// Re-exports for convenience
pub use channel::{Method, PaymentChannel};
pub use platform::{AuthorizationSheet, AuthorizationStatus};
pub use session::{SessionEvents, SessionRegistry};
