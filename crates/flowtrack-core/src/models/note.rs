//! Note model

use serde::{Deserialize, Serialize};

use super::{Record, RecordId};
use crate::util::unix_millis_now;

/// A free-form note on the notes page
///
/// Notes have no edit or completion state; they are written once and
/// deleted when no longer wanted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique identifier
    pub id: RecordId,
    /// Note body
    pub text: String,
    /// Creation timestamp (Unix ms)
    pub created_at: i64,
}

impl Note {
    /// Create a new note with the given text
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: RecordId::new(),
            text: text.into(),
            created_at: unix_millis_now(),
        }
    }
}

impl Record for Note {
    const STORAGE_KEY: &'static str = "flowtrack_notes";

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> i64 {
        self.created_at
    }

    fn from_text(text: String) -> Self {
        Self::new(text)
    }
}
