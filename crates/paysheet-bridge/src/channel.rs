//! # Channel Router
//!
//! The request/response surface the host application talks to. Named
//! operations arrive with an untyped argument bag and are dispatched to
//! the capability check or the payment session driver.
//!
//! Unknown method names fail loudly with `BridgeError::UnsupportedMethod`;
//! a call is never left unanswered.

use crate::platform::AuthorizationSheet;
use crate::session::SessionRegistry;
use paysheet_core::{BridgeError, BridgeResult, PaymentRequest, PaymentResponse};
use serde_json::{json, Value};
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

/// Operations recognized by the channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    CanMakePayment,
    RequestPayment,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::CanMakePayment => "canMakePayment",
            Method::RequestPayment => "requestPayment",
        }
    }
}

impl FromStr for Method {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "canMakePayment" => Ok(Method::CanMakePayment),
            "requestPayment" => Ok(Method::RequestPayment),
            other => Err(BridgeError::UnsupportedMethod {
                method: other.to_string(),
            }),
        }
    }
}

/// The payment channel bridging the host application and the native sheet.
///
/// One channel serves the whole process; `requestPayment` is single-flight
/// and rejects a second call while a session is still on screen.
pub struct PaymentChannel {
    sheet: Arc<dyn AuthorizationSheet>,
    sessions: SessionRegistry,
}

impl PaymentChannel {
    pub fn new(sheet: Arc<dyn AuthorizationSheet>) -> Self {
        Self {
            sheet,
            sessions: SessionRegistry::new(),
        }
    }

    /// Route one named operation to its handler and shape the wire reply.
    ///
    /// | Method | Reply |
    /// |---|---|
    /// | `canMakePayment` | boolean |
    /// | `requestPayment` | `{ token: string\|null, error: string\|null }` |
    pub async fn handle(&self, method: &str, arguments: Value) -> BridgeResult<Value> {
        match method.parse::<Method>()? {
            Method::CanMakePayment => Ok(Value::Bool(self.can_make_payment())),
            Method::RequestPayment => {
                let response = self.request_payment(arguments).await?;
                Ok(json!({ "token": response.token, "error": response.error }))
            }
        }
    }

    /// Whether the device can make payments at all
    pub fn can_make_payment(&self) -> bool {
        self.sheet.can_make_payments()
    }

    /// Validate the argument bag, present the sheet, and await the single
    /// token-or-error reply. User cancellation resolves normally with the
    /// cancelled response; validation and presentation failures are errors.
    pub async fn request_payment(&self, arguments: Value) -> BridgeResult<PaymentResponse> {
        let request = PaymentRequest::from_arguments(&arguments)?;
        debug!(
            merchant = %request.merchant_identifier,
            items = request.item_count(),
            "payment request built"
        );

        let (events, reply) = self.sessions.begin(Arc::clone(&self.sheet))?;

        if let Err(err) = self.sheet.present(request, events.clone()).await {
            events.abandon();
            return Err(err);
        }

        reply.await.map_err(|_| BridgeError::ReplyDropped)
    }
}
