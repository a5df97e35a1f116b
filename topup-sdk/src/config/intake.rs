//! Intake endpoint configuration.

use url::Url;

/// The single, tenant-specific endpoint that records confirmed requests.
pub const DEFAULT_INTAKE_ENDPOINT: &str =
    "https://functions.poehali.dev/6b9d0b26-9bb4-4506-9276-c04e97feeea5";

/// Where confirmation calls are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeConfig {
    pub endpoint: Url,
}

impl IntakeConfig {
    pub fn new(endpoint: Url) -> Self {
        Self { endpoint }
    }

    /// Whether the endpoint is reached over TLS.
    pub fn is_secure(&self) -> bool {
        self.endpoint.scheme() == "https"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint_is_https() {
        let config = IntakeConfig::new(Url::parse(DEFAULT_INTAKE_ENDPOINT).unwrap());
        assert!(config.is_secure());
    }
}
