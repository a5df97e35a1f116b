//! TOML file configuration structures.
//!
//! These structs directly map to the `topup-config.toml` file format. Every
//! section is optional; missing values fall back to the built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use topup_core::utils::amount::AmountParsing;
use topup_sdk::config::{DEFAULT_INTAKE_ENDPOINT, PaymentDetails};

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub intake: IntakeConfig,
    pub payment: PaymentConfig,
    pub store: StoreConfig,
    pub flow: FlowConfig,
}

/// Intake service section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    /// URL receiving confirmation calls.
    pub endpoint: String,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_INTAKE_ENDPOINT.to_string(),
        }
    }
}

/// Payment destination section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentConfig {
    /// Card number; spaces are allowed and ignored.
    pub card_number: String,
    pub holder: Option<String>,
    pub bank: Option<String>,
    pub currency_symbol: String,
    pub review_window: String,
    pub amount_hint: Option<String>,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        let details = PaymentDetails::default();
        Self {
            card_number: details.card_number.to_string(),
            holder: None,
            bank: None,
            currency_symbol: details.currency_symbol.to_string(),
            review_window: details.review_window.to_string(),
            amount_hint: details.amount_hint.map(|hint| hint.to_string()),
        }
    }
}

/// Pending-request storage section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding the pending-request slot.
    pub dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(".topup"),
        }
    }
}

/// Flow behaviour section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    pub amount_parsing: AmountParsing,
    pub handoff_delay_ms: u64,
    pub return_delay_ms: u64,
    pub copied_indicator_ms: u64,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            amount_parsing: AmountParsing::Lenient,
            handoff_delay_ms: 1000,
            return_delay_ms: 2000,
            copied_indicator_ms: 2000,
        }
    }
}
