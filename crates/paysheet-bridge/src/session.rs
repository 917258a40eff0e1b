//! # Payment Sessions
//!
//! One payment session per `requestPayment` call, admitted through a
//! single-flight registry: at most one session is live at a time, and a
//! second call while one is in flight is rejected with a typed error
//! instead of silently stealing the first caller's reply slot.
//!
//! Each session owns a one-shot reply channel. The platform sheet reports
//! its outcome through `SessionEvents`; the first event to claim the
//! channel wins, every later delivery attempt is a no-op.

use crate::platform::{AuthorizationSheet, AuthorizationStatus};
use paysheet_core::{encode_token, BridgeError, BridgeResult, PaymentResponse};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use tracing::{info, warn};
use uuid::Uuid;

/// Per-session lifecycle. `Finished` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    AwaitingAuthorization,
    Authorized,
    Finished,
}

struct SessionInner {
    id: Uuid,
    state: Mutex<SessionState>,
    reply: Mutex<Option<oneshot::Sender<PaymentResponse>>>,
    sheet: Arc<dyn AuthorizationSheet>,
}

/// Admits at most one live payment session.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    current: Arc<Mutex<Option<Arc<SessionInner>>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new session, or fail with `SessionInProgress` when one is
    /// already in flight.
    pub(crate) fn begin(
        &self,
        sheet: Arc<dyn AuthorizationSheet>,
    ) -> BridgeResult<(SessionEvents, oneshot::Receiver<PaymentResponse>)> {
        let mut current = self.current.lock().expect("session registry lock poisoned");
        if current.is_some() {
            return Err(BridgeError::SessionInProgress);
        }

        let (tx, rx) = oneshot::channel();
        let inner = Arc::new(SessionInner {
            id: Uuid::new_v4(),
            state: Mutex::new(SessionState::AwaitingAuthorization),
            reply: Mutex::new(Some(tx)),
            sheet,
        });

        info!(session_id = %inner.id, "payment session started");
        *current = Some(Arc::clone(&inner));

        let events = SessionEvents {
            inner,
            registry: Arc::clone(&self.current),
        };
        Ok((events, rx))
    }
}

/// Handle the platform sheet uses to report events for one session.
///
/// Clone-able and safe to fire from any thread. Events for a session that
/// has already finished are ignored.
#[derive(Clone)]
pub struct SessionEvents {
    inner: Arc<SessionInner>,
    registry: Arc<Mutex<Option<Arc<SessionInner>>>>,
}

impl SessionEvents {
    pub fn session_id(&self) -> Uuid {
        self.inner.id
    }

    /// Authorize event: encode the platform payment data as a token and
    /// deliver the success reply. Returns the status the sheet should show.
    pub fn payment_authorized(&self, payment_data: &[u8]) -> AuthorizationStatus {
        {
            let mut state = self.inner.state.lock().expect("session state lock poisoned");
            match *state {
                SessionState::AwaitingAuthorization => *state = SessionState::Authorized,
                SessionState::Authorized | SessionState::Finished => {
                    warn!(session_id = %self.inner.id, "stale authorize event ignored");
                    return AuthorizationStatus::Failure;
                }
            }
        }

        self.deliver(PaymentResponse::authorized(encode_token(payment_data)));
        AuthorizationStatus::Success
    }

    /// Finish event: always the last event of a session. The first call
    /// delivers the cancelled reply if no authorize preceded it, dismisses
    /// the sheet, and releases the single-flight slot. Later calls no-op.
    pub fn finished(&self) {
        {
            let mut state = self.inner.state.lock().expect("session state lock poisoned");
            if *state == SessionState::Finished {
                warn!(session_id = %self.inner.id, "duplicate finish event ignored");
                return;
            }
            *state = SessionState::Finished;
        }

        // No-op when an authorize event already consumed the reply slot.
        self.deliver(PaymentResponse::cancelled());

        self.inner.sheet.dismiss();
        self.release_slot();
        info!(session_id = %self.inner.id, "payment session finished");
    }

    /// Tear down a session whose sheet never presented. No reply is sent;
    /// the caller already holds the presentation error.
    pub(crate) fn abandon(&self) {
        {
            let mut state = self.inner.state.lock().expect("session state lock poisoned");
            *state = SessionState::Finished;
        }
        self.inner
            .reply
            .lock()
            .expect("session reply lock poisoned")
            .take();
        self.release_slot();
        warn!(session_id = %self.inner.id, "payment session abandoned: sheet not presented");
    }

    /// Send through the pending reply channel; idempotent.
    fn deliver(&self, response: PaymentResponse) {
        let sender = self
            .inner
            .reply
            .lock()
            .expect("session reply lock poisoned")
            .take();

        if let Some(tx) = sender {
            if tx.send(response).is_err() {
                warn!(session_id = %self.inner.id, "caller gone before reply delivery");
            }
        }
    }

    fn release_slot(&self) {
        let mut current = self.registry.lock().expect("session registry lock poisoned");
        if current.as_ref().is_some_and(|s| s.id == self.inner.id) {
            *current = None;
        }
    }
}
