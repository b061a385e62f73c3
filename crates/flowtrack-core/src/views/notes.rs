//! Notes page projection: search and newest first

use std::cmp::Reverse;

use crate::models::Note;
use crate::repo::NoteRepository;
use crate::storage::KvStore;

/// Message shown when no notes exist yet
pub const EMPTY_MESSAGE: &str = "No notes yet — write something above and click Save.";

/// Message shown when a search term matches nothing
pub const NO_MATCH_MESSAGE: &str = "No notes found matching your search";

/// Project notes for display: case-insensitive substring search on the
/// text, then newest first
#[must_use]
pub fn project(notes: &[Note], search: &str) -> Vec<Note> {
    let term = search.trim().to_lowercase();
    let mut visible: Vec<Note> = notes
        .iter()
        .filter(|note| term.is_empty() || note.text.to_lowercase().contains(&term))
        .cloned()
        .collect();
    visible.sort_by_key(|note| Reverse(note.created_at));
    visible
}

/// Notes page controller: holds the search term, re-reads the repository
/// on every render
pub struct NotesView<'a> {
    repo: NoteRepository<'a>,
    search: String,
}

impl<'a> NotesView<'a> {
    /// Create a view over the given store
    #[must_use]
    pub const fn new(store: &'a KvStore) -> Self {
        Self {
            repo: NoteRepository::new(store),
            search: String::new(),
        }
    }

    /// Set the search term; empty means no search
    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
    }

    /// Fresh read and projection
    #[must_use]
    pub fn render(&self) -> Vec<Note> {
        project(&self.repo.list(), &self.search)
    }

    /// Message to show in place of an empty rendered list
    #[must_use]
    pub fn empty_message(&self) -> &'static str {
        if self.search.trim().is_empty() {
            EMPTY_MESSAGE
        } else {
            NO_MATCH_MESSAGE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_sorts_newest_first() {
        let mut notes = vec![Note::new("first saved"), Note::new("second saved")];
        notes[0].created_at = 100;
        notes[1].created_at = 200;

        let projected = project(&notes, "");

        assert_eq!(projected[0].text, "second saved");
        assert_eq!(projected[1].text, "first saved");
    }

    #[test]
    fn test_search_matches_substring_any_case() {
        let notes = vec![Note::new("Standup NOTES for monday"), Note::new("groceries")];

        let hits = project(&notes, "notes");

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text, "Standup NOTES for monday");
    }

    #[test]
    fn test_view_rerenders_from_fresh_read() {
        let store = KvStore::in_memory();
        let view = NotesView::new(&store);
        assert!(view.render().is_empty());

        NoteRepository::new(&store).add("just added").unwrap();

        assert_eq!(view.render().len(), 1);
    }

    #[test]
    fn test_empty_message_depends_on_search() {
        let store = KvStore::in_memory();
        let mut view = NotesView::new(&store);

        assert_eq!(view.empty_message(), EMPTY_MESSAGE);

        view.set_search("anything");
        assert_eq!(view.empty_message(), NO_MATCH_MESSAGE);
    }
}
