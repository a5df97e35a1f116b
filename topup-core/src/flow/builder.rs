//! RequestBuilder: nickname + amount in, pending request out.

use crate::entities::{Amount, Nickname, PendingRequest, SavePendingRequest};
use crate::events::{NoticeKind, Notifier};
use crate::flow::{FlowTimings, Screen, SubmitError, ValidationError};
use crate::framework::StoreProcessor;
use crate::store::KeyValueStore;
use crate::utils::amount::{AmountParsing, parse_amount};
use kanau::processor::Processor;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{error, info};

/// Result of a successful submission: the stored request and where to go next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handoff {
    pub request: PendingRequest,
    pub next: Screen,
}

/// Validates the request form and persists the pending request.
pub struct RequestBuilder<S> {
    store: StoreProcessor<S>,
    notifier: Notifier,
    parsing: AmountParsing,
    handoff_delay: Duration,
    busy: watch::Sender<bool>,
}

impl<S: KeyValueStore> RequestBuilder<S> {
    pub fn new(store: StoreProcessor<S>, notifier: Notifier) -> Self {
        let (busy, _) = watch::channel(false);
        Self {
            store,
            notifier,
            parsing: AmountParsing::default(),
            handoff_delay: FlowTimings::default().handoff_delay,
            busy,
        }
    }

    pub fn with_amount_parsing(mut self, parsing: AmountParsing) -> Self {
        self.parsing = parsing;
        self
    }

    pub fn with_timings(mut self, timings: FlowTimings) -> Self {
        self.handoff_delay = timings.handoff_delay;
        self
    }

    /// `true` while a submission is being stored and handed off.
    pub fn busy(&self) -> watch::Receiver<bool> {
        self.busy.subscribe()
    }

    /// Check the raw form fields. The first failing rule wins:
    /// blank fields, then an amount that is not a positive integer.
    pub fn validate(
        &self,
        nickname_input: &str,
        amount_input: &str,
    ) -> Result<(Nickname, Amount), ValidationError> {
        let Ok(nickname) = Nickname::parse(nickname_input) else {
            return Err(ValidationError::MissingField);
        };
        if amount_input.trim().is_empty() {
            return Err(ValidationError::MissingField);
        }
        let amount = parse_amount(amount_input, self.parsing)
            .and_then(Amount::new)
            .ok_or(ValidationError::InvalidAmount)?;
        Ok((nickname, amount))
    }

    /// Validate, overwrite the pending slot, and hand off to the payment screen.
    ///
    /// Nothing is sent over the network here.
    pub async fn submit(
        &self,
        nickname_input: &str,
        amount_input: &str,
    ) -> Result<Handoff, SubmitError> {
        let (nickname, amount) = match self.validate(nickname_input, amount_input) {
            Ok(fields) => fields,
            Err(e) => {
                info!(error = %e, "Top-up form rejected");
                self.notifier.notify(e.notice());
                return Err(e.into());
            }
        };

        self.busy.send_replace(true);
        let request = PendingRequest::created_now(nickname, amount);

        if let Err(e) = self
            .store
            .process(SavePendingRequest {
                request: request.clone(),
            })
            .await
        {
            error!(error = %e, "Failed to store pending request");
            self.busy.send_replace(false);
            self.notifier.notify(NoticeKind::RequestNotSaved);
            return Err(e.into());
        }

        info!(
            request_id = %request.request_id(),
            amount = request.amount.get(),
            "Pending request stored"
        );

        tokio::time::sleep(self.handoff_delay).await;
        self.busy.send_replace(false);
        self.notifier.notify(NoticeKind::RequestCreated);

        Ok(Handoff {
            request,
            next: Screen::PaymentInstructions,
        })
    }
}
