//! Configuration types for the top-up flow.
//!
//! These types represent the validated runtime configuration and can be
//! shared across crates. The actual config loading/parsing is handled by the
//! CLI crate.

mod intake;
mod payment;

pub use intake::{DEFAULT_INTAKE_ENDPOINT, IntakeConfig};
pub use payment::PaymentDetails;
