//! Profile page projection

use crate::repo::{NoteRepository, TaskRepository};
use crate::session::SessionStore;
use crate::storage::KvStore;

/// Everything the profile card displays, computed from one fresh read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    /// Uppercased first character of the name, for the avatar circle
    pub avatar_initial: char,
    /// Display name
    pub name: String,
    /// Account email, shown as stored
    pub email: String,
    /// Join date formatted like "January 5, 2026"
    pub member_since: String,
    /// Task count plus note count
    pub total_items: usize,
}

impl ProfileView {
    /// Build the profile card from current storage.
    ///
    /// Returns `None` when no profile parses or the stored name/email are
    /// blank; the page renders nothing rather than a half-filled card.
    #[must_use]
    pub fn load(store: &KvStore) -> Option<Self> {
        let profile = SessionStore::new(store).current_user()?;
        if profile.name.trim().is_empty() || profile.email.trim().is_empty() {
            return None;
        }

        let initial = profile.name.chars().next()?;
        let avatar_initial = initial.to_uppercase().next().unwrap_or(initial);

        let task_count = TaskRepository::new(store).list().len();
        let note_count = NoteRepository::new(store).list().len();

        Some(Self {
            avatar_initial,
            name: profile.name,
            email: profile.email,
            member_since: profile.join_date.format("%B %-d, %Y").to_string(),
            total_items: task_count + note_count,
        })
    }
}
