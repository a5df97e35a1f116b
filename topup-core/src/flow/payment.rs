//! PaymentFlow: show payment instructions, forward the confirmation.
//!
//! ```text
//! Loading ──(no record)──▶ Aborted
//!    │
//!    └──(record)──▶ AwaitingConfirmation ──confirm──▶ Submitting ──2xx──▶ Confirmed
//!                        ▲      │                         │
//!                        │      └──back──▶ Abandoned      │
//!                        └────────(non-2xx / transport)───┘
//! ```

use crate::clipboard::Clipboard;
use crate::entities::{ClearPendingRequest, LoadPendingRequest, PendingRequest};
use crate::events::{NoticeKind, Notifier};
use crate::flow::{FlowError, FlowTimings, ForwardToIntake, Screen};
use crate::framework::StoreProcessor;
use crate::store::KeyValueStore;
use kanau::processor::Processor;
use std::sync::Arc;
use tokio::sync::watch;
use topup_sdk::client::ClientError;
use topup_sdk::config::PaymentDetails;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowState {
    Loading,
    AwaitingConfirmation,
    Submitting,
    Confirmed,
    /// Entered without a pending request.
    Aborted,
    /// Left through the back action without confirming.
    Abandoned,
}

impl FlowState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            FlowState::Confirmed | FlowState::Aborted | FlowState::Abandoned
        )
    }
}

impl std::fmt::Display for FlowState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlowState::Loading => write!(f, "loading"),
            FlowState::AwaitingConfirmation => write!(f, "awaiting confirmation"),
            FlowState::Submitting => write!(f, "submitting"),
            FlowState::Confirmed => write!(f, "confirmed"),
            FlowState::Aborted => write!(f, "aborted"),
            FlowState::Abandoned => write!(f, "abandoned"),
        }
    }
}

/// One visit to the payment screen.
///
/// The pending request is only read, never modified. Confirmation requires
/// `&mut self` and is only accepted in `AwaitingConfirmation`, so a second
/// confirmation cannot be issued while one is in flight.
pub struct PaymentFlow<S, I> {
    store: StoreProcessor<S>,
    intake: I,
    notifier: Notifier,
    clipboard: Arc<dyn Clipboard>,
    details: PaymentDetails,
    timings: FlowTimings,
    state: FlowState,
    request: Option<PendingRequest>,
    copied: Arc<watch::Sender<bool>>,
}

impl<S, I> PaymentFlow<S, I>
where
    S: KeyValueStore,
    I: Processor<ForwardToIntake, Output = (), Error = ClientError>,
{
    pub fn new(
        store: StoreProcessor<S>,
        intake: I,
        notifier: Notifier,
        clipboard: Arc<dyn Clipboard>,
        details: PaymentDetails,
    ) -> Self {
        let (copied, _) = watch::channel(false);
        Self {
            store,
            intake,
            notifier,
            clipboard,
            details,
            timings: FlowTimings::default(),
            state: FlowState::Loading,
            request: None,
            copied: Arc::new(copied),
        }
    }

    pub fn with_timings(mut self, timings: FlowTimings) -> Self {
        self.timings = timings;
        self
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    /// The request held in memory once loaded.
    pub fn request(&self) -> Option<&PendingRequest> {
        self.request.as_ref()
    }

    pub fn details(&self) -> &PaymentDetails {
        &self.details
    }

    /// `true` for a short while after a successful copy.
    pub fn copied(&self) -> watch::Receiver<bool> {
        self.copied.subscribe()
    }

    /// Where the player should be for the current state.
    pub fn screen(&self) -> Screen {
        match self.state {
            FlowState::Aborted | FlowState::Abandoned | FlowState::Confirmed => {
                Screen::RequestBuilder
            }
            _ => Screen::PaymentInstructions,
        }
    }

    /// Read the pending request. Without one the flow aborts and the player
    /// is sent back to the builder.
    pub async fn enter(&mut self) -> Result<&PendingRequest, FlowError> {
        if self.state != FlowState::Loading {
            return Err(FlowError::AlreadyEntered(self.state));
        }

        let loaded = self.store.process(LoadPendingRequest).await;
        match loaded {
            Ok(Some(request)) => {
                info!(request_id = %request.request_id(), "Pending request loaded");
                self.state = FlowState::AwaitingConfirmation;
                let request: &PendingRequest = self.request.insert(request);
                Ok(request)
            }
            Ok(None) => {
                info!("Payment screen opened without a pending request");
                self.abort();
                Err(FlowError::RecordNotFound)
            }
            Err(e) => {
                warn!(error = %e, "Pending request unreadable");
                self.abort();
                Err(e.into())
            }
        }
    }

    fn abort(&mut self) {
        self.state = FlowState::Aborted;
        self.notifier.notify(NoticeKind::RequestNotFound);
    }

    /// Place `text` on the clipboard and flash the copied indicator.
    pub fn copy_to_clipboard(&self, text: &str) {
        if let Err(e) = self.clipboard.write_text(text) {
            warn!(error = %e, "Clipboard write failed");
            self.notifier.notify(NoticeKind::CopyFailed);
            return;
        }

        self.copied.send_replace(true);
        self.notifier.notify(NoticeKind::Copied);

        let copied = Arc::clone(&self.copied);
        let hold = self.timings.copied_indicator;
        tokio::spawn(async move {
            tokio::time::sleep(hold).await;
            copied.send_replace(false);
        });
    }

    /// Copy the configured card number.
    pub fn copy_card_number(&self) {
        self.copy_to_clipboard(self.details.copy_value());
    }

    /// Forward the pending request to the intake service.
    ///
    /// On success the stored slot is cleared and, after the return delay, the
    /// flow is `Confirmed`. On failure the flow goes back to
    /// `AwaitingConfirmation` so the player can try again.
    pub async fn confirm_payment(&mut self) -> Result<(), FlowError> {
        if self.state != FlowState::AwaitingConfirmation {
            warn!(state = %self.state, "Confirmation ignored");
            return Err(FlowError::NotAwaitingConfirmation(self.state));
        }
        let Some(request) = self.request.clone() else {
            return Err(FlowError::RecordNotFound);
        };

        let request_id = request.request_id();
        self.state = FlowState::Submitting;
        debug!(request_id = %request_id, "Submitting confirmation");

        let outcome = self.intake.process(ForwardToIntake { request }).await;
        match outcome {
            Ok(()) => {
                self.state = FlowState::Confirmed;
                info!(request_id = %request_id, "Request forwarded for manual review");
                self.notifier.notify(NoticeKind::Forwarded);

                if let Err(e) = self.store.process(ClearPendingRequest).await {
                    warn!(error = %e, "Failed to clear confirmed request");
                }

                tokio::time::sleep(self.timings.return_delay).await;
                Ok(())
            }
            Err(ClientError::Api { status, body }) => {
                self.state = FlowState::AwaitingConfirmation;
                warn!(
                    request_id = %request_id,
                    status = %status,
                    body = %body,
                    "Intake service rejected the request"
                );
                self.notifier.notify(NoticeKind::SubmissionFailed);
                Err(FlowError::SubmissionRejected {
                    status: status.as_u16(),
                })
            }
            Err(e) => {
                self.state = FlowState::AwaitingConfirmation;
                warn!(request_id = %request_id, error = %e, "Intake request failed");
                self.notifier.notify(NoticeKind::ConnectionFailed);
                Err(FlowError::TransportFailure(e.to_string()))
            }
        }
    }

    /// Leave the payment screen without confirming. The stored request is
    /// kept; the next builder submission replaces it.
    pub fn back(&mut self) -> Screen {
        if !self.state.is_terminal() {
            self.state = FlowState::Abandoned;
        }
        Screen::RequestBuilder
    }
}
