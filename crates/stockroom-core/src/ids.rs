//! Item identifiers.
//!
//! Ids are opaque tokens. Freshly generated ids are UUID v4 in simple
//! (hyphen-less) form, but anything read back from the data file is accepted
//! verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of an inventory item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create an id from an existing token.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ItemId::new("a1");
        assert_eq!(id.as_str(), "a1");
    }

    #[test]
    fn test_id_generation() {
        let id1 = ItemId::generate();
        let id2 = ItemId::generate();
        assert_ne!(id1, id2);
        assert_eq!(id1.as_str().len(), 32);
        assert!(id1.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ItemId::new("V1StGXR8_Z5jdHi6B-myT");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"V1StGXR8_Z5jdHi6B-myT\"");

        let back: ItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_id_display() {
        let id = ItemId::new("item-789");
        assert_eq!(format!("{}", id), "item-789");
    }
}
