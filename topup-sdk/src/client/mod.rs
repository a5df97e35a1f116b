//! HTTP client for the intake service.
//!
//! Gated behind the `client` cargo feature so downstream crates that only
//! need the shared types do not pull in `reqwest`.

mod intake;

pub use intake::IntakeClient;

use reqwest::StatusCode;

/// Errors produced by the intake client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (DNS, TLS, connection reset, …).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The intake service returned a non-2xx status code.
    #[error("api error: status {status}, body: {body}")]
    Api { status: StatusCode, body: String },

    /// Request body could not be serialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
