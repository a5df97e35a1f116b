//! Intake API client (player device → intake service).

use reqwest::Client;
use url::Url;

use super::ClientError;
use crate::objects::CreateRequestPayload;

/// Typed HTTP client for the intake endpoint.
///
/// No request timeout is configured: a confirmation call waits until the
/// service answers or the transport gives up.
#[derive(Debug, Clone)]
pub struct IntakeClient {
    http: Client,
    endpoint: Url,
}

impl IntakeClient {
    /// Create a new `IntakeClient` posting to `endpoint`.
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }

    /// Replace the default `reqwest::Client` with a custom one (e.g. to
    /// configure a proxy).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// `POST {endpoint}` with `action = "create_request"`.
    ///
    /// Any 2xx status counts as acceptance; the response body is not read.
    pub async fn create_request(&self, payload: &CreateRequestPayload) -> Result<(), ClientError> {
        let body = serde_json::to_string(payload)?;

        let resp = self
            .http
            .post(self.endpoint.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Api { status, body });
        }
        Ok(())
    }
}
