pub mod pending_request;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU64;
use thiserror::Error;

pub use pending_request::{
    ClearPendingRequest, LoadPendingRequest, PENDING_REQUEST_KEY, PendingRequest,
    SavePendingRequest,
};

/// Rejected nickname text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("nickname must not be empty")]
pub struct EmptyNickname;

/// A player-chosen identifier, trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CompactString", into = "CompactString")]
pub struct Nickname(CompactString);

impl Nickname {
    /// Trim `raw` and accept it if anything is left.
    pub fn parse(raw: &str) -> Result<Self, EmptyNickname> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(EmptyNickname);
        }
        Ok(Self(CompactString::from(trimmed)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<CompactString> for Nickname {
    type Error = EmptyNickname;

    fn try_from(value: CompactString) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Nickname> for CompactString {
    fn from(value: Nickname) -> Self {
        value.0
    }
}

impl std::fmt::Display for Nickname {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Quantity of in-game currency. Always a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(NonZeroU64);

impl Amount {
    /// Accepts strictly positive values only.
    pub fn new(value: i64) -> Option<Self> {
        u64::try_from(value).ok().and_then(NonZeroU64::new).map(Self)
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nickname_is_trimmed() {
        let nickname = Nickname::parse("  Player1 \t").unwrap();
        assert_eq!(nickname.as_str(), "Player1");
    }

    #[test]
    fn test_blank_nickname_rejected() {
        assert_eq!(Nickname::parse(""), Err(EmptyNickname));
        assert_eq!(Nickname::parse(" \n\t "), Err(EmptyNickname));
    }

    #[test]
    fn test_blank_nickname_rejected_on_deserialize() {
        assert!(serde_json::from_str::<Nickname>(r#""   ""#).is_err());
        let nickname: Nickname = serde_json::from_str(r#"" X ""#).unwrap();
        assert_eq!(nickname.as_str(), "X");
    }

    #[test]
    fn test_amount_must_be_positive() {
        assert_eq!(Amount::new(500).map(Amount::get), Some(500));
        assert_eq!(Amount::new(0), None);
        assert_eq!(Amount::new(-5), None);
        assert!(serde_json::from_str::<Amount>("0").is_err());
        assert!(serde_json::from_str::<Amount>("-3").is_err());
        assert_eq!(serde_json::from_str::<Amount>("12").unwrap().get(), 12);
    }
}
