use crate::store::KeyValueStore;

/// Runs entity queries against a key-value backend.
///
/// Entity modules implement `kanau::processor::Processor` for this type, one
/// impl per query struct.
#[derive(Debug, Clone)]
pub struct StoreProcessor<S> {
    pub store: S,
}

impl<S: KeyValueStore> StoreProcessor<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}
