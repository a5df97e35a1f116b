//! Configuration module for the `topup` binary.
//!
//! Handles loading configuration from TOML files, CLI arguments and
//! environment variables, and turns it into validated runtime types.

pub mod file;

use crate::config::file::{FileConfig, PaymentConfig};
use compact_str::CompactString;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use topup_core::flow::FlowTimings;
use topup_core::utils::amount::AmountParsing;
use topup_sdk::config::{IntakeConfig, PaymentDetails};
use url::Url;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("invalid intake endpoint: {0}")]
    EndpointError(#[from] url::ParseError),

    #[error("validation error: {0}")]
    ValidationError(String),
}

/// Values given on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub endpoint: Option<Url>,
    pub store_dir: Option<PathBuf>,
    pub strict_amount: bool,
}

/// Loaded configuration result containing all parts.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub intake: IntakeConfig,
    pub payment: PaymentDetails,
    pub store_dir: PathBuf,
    pub timings: FlowTimings,
    pub amount_parsing: AmountParsing,
}

/// Configuration loader that handles the complete loading process.
pub struct ConfigLoader {
    config_path: PathBuf,
    overrides: Overrides,
}

impl ConfigLoader {
    /// Create a new config loader.
    pub fn new(config_path: impl AsRef<Path>, overrides: Overrides) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
            overrides,
        }
    }

    /// Load and process the configuration.
    ///
    /// A missing config file is not an error: the built-in defaults are used.
    pub fn load(&self) -> Result<LoadedConfig, ConfigError> {
        let file_config = match std::fs::read_to_string(&self.config_path) {
            Ok(content) => toml::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(
                    path = %self.config_path.display(),
                    "No config file, using defaults"
                );
                FileConfig::default()
            }
            Err(e) => return Err(e.into()),
        };

        self.build_loaded_config(file_config)
    }

    fn build_loaded_config(&self, file_config: FileConfig) -> Result<LoadedConfig, ConfigError> {
        let endpoint = match &self.overrides.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => Url::parse(&file_config.intake.endpoint)?,
        };
        let intake = validate_intake(endpoint)?;
        let payment = convert_payment(file_config.payment)?;

        let amount_parsing = if self.overrides.strict_amount {
            AmountParsing::Strict
        } else {
            file_config.flow.amount_parsing
        };

        Ok(LoadedConfig {
            intake,
            payment,
            store_dir: self
                .overrides
                .store_dir
                .clone()
                .unwrap_or(file_config.store.dir),
            timings: FlowTimings {
                handoff_delay: Duration::from_millis(file_config.flow.handoff_delay_ms),
                return_delay: Duration::from_millis(file_config.flow.return_delay_ms),
                copied_indicator: Duration::from_millis(file_config.flow.copied_indicator_ms),
            },
            amount_parsing,
        })
    }
}

fn validate_intake(endpoint: Url) -> Result<IntakeConfig, ConfigError> {
    let config = IntakeConfig::new(endpoint);
    if config.is_secure() {
        return Ok(config);
    }
    match config.endpoint.scheme() {
        "http" => {
            tracing::warn!(endpoint = %config.endpoint, "Intake endpoint is not using TLS");
            Ok(config)
        }
        other => Err(ConfigError::ValidationError(format!(
            "intake endpoint scheme must be http or https, got {other}"
        ))),
    }
}

fn convert_payment(p: PaymentConfig) -> Result<PaymentDetails, ConfigError> {
    let card_number: String = p.card_number.split_whitespace().collect();
    if card_number.is_empty() || !card_number.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConfigError::ValidationError(format!(
            "card number must be digits, got {:?}",
            p.card_number
        )));
    }
    if p.currency_symbol.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "currency symbol must not be empty".to_string(),
        ));
    }

    Ok(PaymentDetails {
        card_number: CompactString::from(card_number),
        holder: p.holder.map(CompactString::from),
        bank: p.bank.map(CompactString::from),
        currency_symbol: CompactString::from(p.currency_symbol),
        review_window: CompactString::from(p.review_window),
        amount_hint: p.amount_hint.map(CompactString::from),
    })
}
