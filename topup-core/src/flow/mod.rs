//! The two-step top-up lifecycle.
//!
//! 1. [`RequestBuilder`] validates nickname + amount and writes the pending
//!    request into the store, then hands off to the payment screen.
//! 2. [`PaymentFlow`] reads the pending request back, shows the payment
//!    destination and forwards the player's confirmation to the intake
//!    service.

pub mod builder;
pub mod error;
pub mod intake;
pub mod payment;

pub use builder::{Handoff, RequestBuilder};
pub use error::{FlowError, SubmitError, ValidationError};
pub use intake::ForwardToIntake;
pub use payment::{FlowState, PaymentFlow};

use std::time::Duration;

/// The two logical screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    RequestBuilder,
    PaymentInstructions,
}

impl Screen {
    pub fn route(self) -> &'static str {
        match self {
            Screen::RequestBuilder => "/",
            Screen::PaymentInstructions => "/payment",
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.route())
    }
}

/// Presentation delays. None of them affect correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowTimings {
    /// Busy period between storing a request and opening the payment screen.
    pub handoff_delay: Duration,
    /// Pause after a successful confirmation before returning to the builder.
    pub return_delay: Duration,
    /// How long the "copied" indicator stays on.
    pub copied_indicator: Duration,
}

impl FlowTimings {
    /// No pauses at all.
    pub const IMMEDIATE: Self = Self {
        handoff_delay: Duration::ZERO,
        return_delay: Duration::ZERO,
        copied_indicator: Duration::ZERO,
    };
}

impl Default for FlowTimings {
    fn default() -> Self {
        Self {
            handoff_delay: Duration::from_millis(1000),
            return_delay: Duration::from_millis(2000),
            copied_indicator: Duration::from_millis(2000),
        }
    }
}
