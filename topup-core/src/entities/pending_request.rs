use crate::entities::{Amount, Nickname};
use crate::framework::StoreProcessor;
use crate::store::{KeyValueStore, StoreError};
use kanau::processor::Processor;
use serde::{Deserialize, Serialize};
use topup_sdk::objects::CreateRequestPayload;

/// Well-known key of the single pending-request slot.
pub const PENDING_REQUEST_KEY: &str = "donateRequest";

/// The one top-up request awaiting payment confirmation.
///
/// Stored as `{ "nickname", "amount", "timestamp" }` with the timestamp in
/// milliseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingRequest {
    pub nickname: Nickname,
    pub amount: Amount,
    #[serde(rename = "timestamp")]
    pub created_at: i64,
}

impl PendingRequest {
    pub fn new(nickname: Nickname, amount: Amount, created_at: i64) -> Self {
        Self {
            nickname,
            amount,
            created_at,
        }
    }

    /// Stamp a new request with the current time.
    pub fn created_now(nickname: Nickname, amount: Amount) -> Self {
        Self::new(nickname, amount, now_millis())
    }

    /// Identifier the operator sees for this request.
    pub fn request_id(&self) -> String {
        topup_sdk::objects::request_id(self.nickname.as_str(), self.amount.get(), self.created_at)
    }

    /// Body of the confirmation call for this request.
    pub fn to_intake_payload(&self) -> CreateRequestPayload {
        CreateRequestPayload::new(self.nickname.as_str(), self.amount.get(), self.created_at)
    }
}

/// Milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    (time::OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

#[derive(Debug, Clone)]
/// Overwrite the slot with a new request.
pub struct SavePendingRequest {
    pub request: PendingRequest,
}

#[derive(Debug, Clone, Copy)]
/// Read the slot. Absence is `Ok(None)`.
pub struct LoadPendingRequest;

#[derive(Debug, Clone, Copy)]
/// Empty the slot. Clearing an empty slot is not an error.
pub struct ClearPendingRequest;

impl<S: KeyValueStore> Processor<SavePendingRequest> for StoreProcessor<S> {
    type Output = ();
    type Error = StoreError;
    #[tracing::instrument(skip_all, err, name = "STORE:SavePendingRequest")]
    async fn process(&self, query: SavePendingRequest) -> Result<(), StoreError> {
        let json = serde_json::to_string(&query.request).map_err(StoreError::Encode)?;
        self.store.set(PENDING_REQUEST_KEY, json).await
    }
}

impl<S: KeyValueStore> Processor<LoadPendingRequest> for StoreProcessor<S> {
    type Output = Option<PendingRequest>;
    type Error = StoreError;
    #[tracing::instrument(skip_all, err, name = "STORE:LoadPendingRequest")]
    async fn process(&self, _query: LoadPendingRequest) -> Result<Option<PendingRequest>, StoreError> {
        let Some(json) = self.store.get(PENDING_REQUEST_KEY).await? else {
            return Ok(None);
        };
        serde_json::from_str(&json)
            .map(Some)
            .map_err(|source| StoreError::Corrupt {
                key: PENDING_REQUEST_KEY,
                source,
            })
    }
}

impl<S: KeyValueStore> Processor<ClearPendingRequest> for StoreProcessor<S> {
    type Output = ();
    type Error = StoreError;
    #[tracing::instrument(skip_all, err, name = "STORE:ClearPendingRequest")]
    async fn process(&self, _query: ClearPendingRequest) -> Result<(), StoreError> {
        self.store.remove(PENDING_REQUEST_KEY).await
    }
}
