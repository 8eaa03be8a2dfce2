//! Unique identifier types for exchange entities
//!
//! Order ids are plain monotonic integers assigned by the order book
//! and never reused. Trade ids use UUID v7 for time-sortable ordering.
//! Token ids and principals are opaque strings supplied by callers.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for an order
///
/// Assigned sequentially by the order book; strictly increasing and
/// never reused, so a lower id always means an earlier placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    /// Create from a raw sequence value
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw sequence value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a trade
///
/// Uses UUID v7 for time-based sorting of settlement records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradeId(Uuid);

impl TradeId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TradeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Token identifier
///
/// Opaque non-empty string naming a tradable asset (e.g. "ICP", "TOKEN1").
/// A token must be registered before any balance or order referencing it
/// is valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(String);

impl TokenId {
    /// Create a new TokenId from a string
    ///
    /// # Panics
    /// Panics if the identifier is empty
    pub fn new(id: impl Into<String>) -> Self {
        let s = id.into();
        assert!(!s.is_empty(), "TokenId must not be empty");
        Self(s)
    }

    /// Try to create a TokenId, returning None if invalid
    pub fn try_new(id: impl Into<String>) -> Option<Self> {
        let s = id.into();
        if s.is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    /// Get the identifier string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TokenId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Caller identity
///
/// Opaque principal-like value identifying the owner of balances and
/// orders. Threaded explicitly through every operation rather than read
/// from ambient context, preserving testability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    /// Create a new Principal from a string
    ///
    /// # Panics
    /// Panics if the identity is empty
    pub fn new(id: impl Into<String>) -> Self {
        let s = id.into();
        assert!(!s.is_empty(), "Principal must not be empty");
        Self(s)
    }

    /// Get the identity string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Principal {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_ordering() {
        let id1 = OrderId::new(1);
        let id2 = OrderId::new(2);
        assert!(id1 < id2, "Lower sequence means earlier placement");
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_order_id_serialization() {
        let id = OrderId::new(42);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "42");
        let deserialized: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_trade_id_creation() {
        let id1 = TradeId::new();
        let id2 = TradeId::new();
        assert_ne!(id1, id2, "TradeIds should be unique");
    }

    #[test]
    fn test_token_id_creation() {
        let token = TokenId::new("ICP");
        assert_eq!(token.as_str(), "ICP");
    }

    #[test]
    fn test_token_id_try_new() {
        assert!(TokenId::try_new("TOKEN1").is_some());
        assert!(TokenId::try_new("").is_none());
    }

    #[test]
    #[should_panic(expected = "TokenId must not be empty")]
    fn test_token_id_empty_panics() {
        TokenId::new("");
    }

    #[test]
    fn test_token_id_serialization() {
        let token = TokenId::new("TOKEN2");
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, "\"TOKEN2\"");
        let deserialized: TokenId = serde_json::from_str(&json).unwrap();
        assert_eq!(token, deserialized);
    }

    #[test]
    fn test_principal_creation() {
        let owner = Principal::new("alice");
        assert_eq!(owner.as_str(), "alice");
        assert_eq!(owner, Principal::from("alice"));
    }

    #[test]
    #[should_panic(expected = "Principal must not be empty")]
    fn test_principal_empty_panics() {
        Principal::new("");
    }
}
