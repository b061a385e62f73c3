//! Record identity and the collection-member contract

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A unique identifier for a stored record, using UUID v7 (time-sortable)
///
/// Ids combine a creation timestamp with random bits, so uniqueness is
/// probabilistic rather than guaranteed. The repositories do not defend
/// against collisions; lookups take the first match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Create a new unique record ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Contract for a member of a whole-collection storage document.
///
/// Each implementor names the storage key its collection lives under and
/// exposes the fields the repository needs for lookup, ordering, and
/// construction. Collections are stored as a single JSON array per key and
/// always read and written whole.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Storage key holding the entire collection
    const STORAGE_KEY: &'static str;

    /// Unique identifier
    fn id(&self) -> RecordId;

    /// Creation timestamp (Unix ms); read-time projections sort by this
    fn created_at(&self) -> i64;

    /// Construct a fresh record from already-validated, trimmed text
    fn from_text(text: String) -> Self;
}
