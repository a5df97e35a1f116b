//! Session state shared by every screen and command.

use crate::config::LoadedConfig;
use crate::terminal::Osc52Clipboard;
use std::sync::Arc;
use topup_core::clipboard::Clipboard;
use topup_core::events::Notifier;
use topup_core::flow::{FlowTimings, PaymentFlow, RequestBuilder};
use topup_core::framework::StoreProcessor;
use topup_core::store::{FileStore, KeyValueStore, MemoryStore, StoreError};
use topup_core::utils::amount::AmountParsing;
use topup_sdk::client::IntakeClient;
use topup_sdk::config::PaymentDetails;
use tracing::debug;

/// Backend chosen at startup.
#[derive(Debug, Clone)]
pub enum SessionStore {
    File(FileStore),
    Memory(MemoryStore),
}

impl KeyValueStore for SessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self {
            SessionStore::File(store) => store.get(key).await,
            SessionStore::Memory(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        match self {
            SessionStore::File(store) => store.set(key, value).await,
            SessionStore::Memory(store) => store.set(key, value).await,
        }
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        match self {
            SessionStore::File(store) => store.remove(key).await,
            SessionStore::Memory(store) => store.remove(key).await,
        }
    }
}

/// Everything a screen needs to build its flow.
///
/// Cheap to clone: the store and clipboard are shared.
#[derive(Clone)]
pub struct AppState {
    pub store: SessionStore,
    pub intake: IntakeClient,
    pub notifier: Notifier,
    pub clipboard: Arc<dyn Clipboard>,
    pub details: PaymentDetails,
    pub timings: FlowTimings,
    pub amount_parsing: AmountParsing,
}

impl AppState {
    /// Build the session from loaded configuration.
    ///
    /// With `ephemeral` the pending request only lives as long as the process.
    pub fn new(config: LoadedConfig, notifier: Notifier, ephemeral: bool) -> Self {
        let store = if ephemeral {
            debug!("Pending request kept in memory");
            SessionStore::Memory(MemoryStore::new())
        } else {
            let store = FileStore::new(&config.store_dir);
            debug!(dir = %store.dir().display(), "Pending request kept on disk");
            SessionStore::File(store)
        };
        let intake = IntakeClient::new(config.intake.endpoint);
        debug!(endpoint = %intake.endpoint(), "Intake client ready");

        Self {
            store,
            intake,
            notifier,
            clipboard: Arc::new(Osc52Clipboard),
            details: config.payment,
            timings: config.timings,
            amount_parsing: config.amount_parsing,
        }
    }

    pub fn store_processor(&self) -> StoreProcessor<SessionStore> {
        StoreProcessor::new(self.store.clone())
    }

    pub fn builder(&self) -> RequestBuilder<SessionStore> {
        RequestBuilder::new(self.store_processor(), self.notifier.clone())
            .with_amount_parsing(self.amount_parsing)
            .with_timings(self.timings)
    }

    pub fn payment_flow(&self) -> PaymentFlow<SessionStore, IntakeClient> {
        PaymentFlow::new(
            self.store_processor(),
            self.intake.clone(),
            self.notifier.clone(),
            Arc::clone(&self.clipboard),
            self.details.clone(),
        )
        .with_timings(self.timings)
    }
}
