//! Task model

use serde::{Deserialize, Serialize};

use super::{Record, RecordId};
use crate::util::unix_millis_now;

/// A to-do item on the tasks page
///
/// Serialized with camelCase field names so the stored JSON matches the
/// documents the app has always written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier
    pub id: RecordId,
    /// Trimmed task text
    pub text: String,
    /// Whether the task is done; toggled from the list
    #[serde(default)]
    pub completed: bool,
    /// Creation timestamp (Unix ms)
    pub created_at: i64,
}

impl Task {
    /// Create a new incomplete task with the given text
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: RecordId::new(),
            text: text.into(),
            completed: false,
            created_at: unix_millis_now(),
        }
    }
}

impl Record for Task {
    const STORAGE_KEY: &'static str = "flowtrack_tasks";

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
