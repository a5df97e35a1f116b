use crate::events::NoticeKind;
use crate::flow::FlowState;
use crate::store::StoreError;
use thiserror::Error;

/// Rejected builder input. Nothing is stored when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Nickname or amount is empty after trimming
    #[error("nickname and amount are both required")]
    MissingField,

    /// Amount does not parse to a positive integer
    #[error("amount must be a positive integer")]
    InvalidAmount,
}

impl ValidationError {
    pub fn notice(self) -> NoticeKind {
        match self {
            ValidationError::MissingField => NoticeKind::MissingField,
            ValidationError::InvalidAmount => NoticeKind::InvalidAmount,
        }
    }
}

/// Errors from [`RequestBuilder::submit`](crate::flow::RequestBuilder::submit).
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("failed to store pending request: {0}")]
    Store(#[from] StoreError),
}

/// Errors from [`PaymentFlow`](crate::flow::PaymentFlow).
#[derive(Debug, Error)]
pub enum FlowError {
    /// The payment screen was opened with an empty slot
    #[error("no pending request found")]
    RecordNotFound,

    /// The slot could not be read
    #[error("failed to read pending request: {0}")]
    Store(#[from] StoreError),

    /// The intake service answered with a non-2xx status
    #[error("intake service rejected the request with status {status}")]
    SubmissionRejected { status: u16 },

    /// The confirmation call did not complete
    #[error("could not reach the intake service: {0}")]
    TransportFailure(String),

    /// Confirmation attempted outside `AwaitingConfirmation`
    #[error("cannot confirm payment while {0}")]
    NotAwaitingConfirmation(FlowState),

    /// The flow was already entered
    #[error("payment flow already entered ({0})")]
    AlreadyEntered(FlowState),
}

impl FlowError {
    /// Whether the player may simply try again from the payment screen.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            FlowError::SubmissionRejected { .. } | FlowError::TransportFailure(_)
        )
    }
}
