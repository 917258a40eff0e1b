//! # Platform Seam
//!
//! Trait boundary for the native payment-authorization sheet. The bridge
//! treats the platform as a black box: it presents a sheet for a built
//! `PaymentRequest` and receives authorize/finish events back through a
//! `SessionEvents` handle.

use crate::session::SessionEvents;
use async_trait::async_trait;
use paysheet_core::{BridgeResult, PaymentRequest};

/// Status reported back to the sheet after an authorize event, so it can
/// show its success or failure state before dismissing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationStatus {
    Success,
    Failure,
}

/// The native payment-authorization sheet.
///
/// Implementations present a modal flow and deliver at most one
/// authorize event followed by exactly one finish event, always last,
/// through the `SessionEvents` handle they were given.
#[async_trait]
pub trait AuthorizationSheet: Send + Sync {
    /// Platform capability query. Synchronous, infallible, no side effects.
    fn can_make_payments(&self) -> bool;

    /// Present the modal sheet for `request`.
    ///
    /// Returns once presentation has begun; authorize/finish events may
    /// arrive before or after that, on any thread.
    async fn present(
        &self,
        request: PaymentRequest,
        events: SessionEvents,
    ) -> BridgeResult<()>;

    /// Dismiss the sheet. Invoked exactly once per session, after the
    /// finish event.
    fn dismiss(&self);
}
