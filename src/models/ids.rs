//! Opaque identifiers for events, teams and leagues.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// An identifier as handed out by the data provider.
///
/// Provider ids are opaque strings: `"133604"` and `133604` compare equal only
/// because numeric JSON ids are converted to their decimal text on ingest,
/// never because the id is parsed as a number.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderId(String);

impl ProviderId {
    /// Create a new ProviderId from its text form.
    pub fn new(id: String) -> Self {
        Self(id)
    }

    /// Derive a deterministic id from content fields.
    /// Uses SHA256 and takes the first 16 characters, the same way for
    /// every caller, so records without a provider id stay keyable.
    pub fn derive(fields: &[&str]) -> Self {
        let mut hasher = Sha256::new();
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                hasher.update(b"|");
            }
            hasher.update(field.as_bytes());
        }
        let hash = hex::encode(hasher.finalize());
        Self(hash[..16].to_string())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProviderId({})", self.0)
    }
}

impl From<String> for ProviderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProviderId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl PartialEq<str> for ProviderId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// Type alias for match event IDs
pub type EventId = ProviderId;

/// Type alias for team IDs
pub type TeamId = ProviderId;

/// Type alias for league IDs
pub type LeagueId = ProviderId;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_deterministic() {
        let id1 = ProviderId::derive(&["Arsenal vs Chelsea", "2024-03-10"]);
        let id2 = ProviderId::derive(&["Arsenal vs Chelsea", "2024-03-10"]);
        assert_eq!(id1, id2);
    }

    #[test]
    fn test_derive_different_inputs() {
        let id1 = ProviderId::derive(&["Arsenal vs Chelsea", "2024-03-10"]);
        let id2 = ProviderId::derive(&["Arsenal vs Chelsea", "2024-03-11"]);
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_derive_length_and_hex() {
        let id = ProviderId::derive(&["test", "input"]);
        assert_eq!(id.as_str().len(), 16);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = ProviderId::from("133604");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"133604\"");

        let back: ProviderId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_compare_with_str() {
        let id = ProviderId::from("133604");
        assert!(id == *"133604");
        assert!(id != *"133604 ");
    }

    #[test]
    fn test_debug_and_display() {
        let id = ProviderId::new("abc".to_string());
        assert_eq!(format!("{}", id), "abc");
        assert!(format!("{:?}", id).contains("abc"));
    }
}
