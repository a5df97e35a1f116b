//! Payloads understood by the remote intake service.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Actions accepted by the intake endpoint.
///
/// The player-facing client only ever sends [`IntakeAction::CreateRequest`];
/// the other two are issued by the operator tooling once a payment has been
/// checked by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeAction {
    CreateRequest,
    ConfirmPayment,
    RejectPayment,
}

impl std::fmt::Display for IntakeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntakeAction::CreateRequest => write!(f, "create_request"),
            IntakeAction::ConfirmPayment => write!(f, "confirm_payment"),
            IntakeAction::RejectPayment => write!(f, "reject_payment"),
        }
    }
}

/// Body of the confirmation call.
///
/// Sent once the player asserts they have transferred the money.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreateRequestPayload {
    pub action: IntakeAction,
    pub nickname: CompactString,
    pub amount: u64,
    /// Milliseconds since the Unix epoch at which the request was created.
    pub timestamp: i64,
}

impl CreateRequestPayload {
    pub fn new(nickname: impl Into<CompactString>, amount: u64, timestamp: i64) -> Self {
        Self {
            action: IntakeAction::CreateRequest,
            nickname: nickname.into(),
            amount,
            timestamp,
        }
    }

    /// Identifier the operator sees for this request.
    pub fn request_id(&self) -> String {
        request_id(&self.nickname, self.amount, self.timestamp)
    }
}

/// Success body returned by the intake service.
///
/// The client never depends on it: any 2xx status means the request was
/// accepted, whatever the body says.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeReceipt {
    pub success: bool,
    #[serde(default)]
    pub request_id: Option<String>,
}

/// Build the operator-facing request identifier: `{nickname}_{amount}_{timestamp}`.
pub fn request_id(nickname: &str, amount: u64, timestamp: i64) -> String {
    format!("{nickname}_{amount}_{timestamp}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_wire_shape() {
        let payload = CreateRequestPayload::new("Player1", 500, 1_700_000_000_000);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "action": "create_request",
                "nickname": "Player1",
                "amount": 500,
                "timestamp": 1_700_000_000_000i64,
            })
        );
    }

    #[test]
    fn test_request_id_format() {
        let payload = CreateRequestPayload::new("Player1", 500, 42);
        assert_eq!(payload.request_id(), "Player1_500_42");
    }

    #[test]
    fn test_receipt_without_request_id() {
        let receipt: IntakeReceipt = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(receipt.success);
        assert_eq!(receipt.request_id, None);
    }

    #[test]
    fn test_action_display_matches_wire() {
        for action in [
            IntakeAction::CreateRequest,
            IntakeAction::ConfirmPayment,
            IntakeAction::RejectPayment,
        ] {
            let wire = serde_json::to_string(&action).unwrap();
            assert_eq!(wire, format!("\"{action}\""));
        }
    }
}
