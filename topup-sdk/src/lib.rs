//! Shared types for the in-game currency top-up flow.
//!
//! * [`objects`] – wire payloads exchanged with the intake service.
//! * [`config`] – static payment destination and intake endpoint settings.
//! * [`client`] – typed HTTP client for the intake endpoint (feature `client`).

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]

#[cfg(feature = "client")]
pub mod client;
pub mod config;
pub mod objects;
