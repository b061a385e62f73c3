//! Generic collection repository over whole-document storage

use std::marker::PhantomData;

use crate::error::{Error, Result};
use crate::models::{Note, Record, RecordId, Task};
use crate::storage::KvStore;
use crate::util::normalize_required;

/// Repository over one whole-collection storage document.
///
/// Every mutation follows the same cycle: read the entire collection,
/// change it in memory, write the entire collection back. The document
/// under `T::STORAGE_KEY` is the unit of consistency; there are no partial
/// updates and no cross-key transactions. Mutations that do not apply
/// (empty text, unknown id) return an error and leave storage untouched.
pub struct CollectionRepository<'a, T: Record> {
    store: &'a KvStore,
    _kind: PhantomData<T>,
}

/// Repository over the tasks collection
pub type TaskRepository<'a> = CollectionRepository<'a, Task>;

/// Repository over the notes collection
pub type NoteRepository<'a> = CollectionRepository<'a, Note>;

impl<'a, T: Record> CollectionRepository<'a, T> {
    /// Create a new repository over the given store
    #[must_use]
    pub const fn new(store: &'a KvStore) -> Self {
        Self {
            store,
            _kind: PhantomData,
        }
    }

    /// All records in storage order (insertion order).
    ///
    /// Missing or corrupted storage yields an empty collection; rendering
    /// an empty page beats refusing to load.
    pub fn list(&self) -> Vec<T> {
        self.store.get(T::STORAGE_KEY).unwrap_or_default()
    }

    /// Append a new record built from `text`.
    ///
    /// The text is trimmed; empty or whitespace-only input is rejected
    /// without touching the collection.
    pub fn add(&self, text: &str) -> Result<T> {
        let text = normalize_required(text).ok_or(Error::EmptyText)?;
        let record = T::from_text(text);
        let mut records = self.list();
        records.push(record.clone());
        self.store.set(T::STORAGE_KEY, &records);
        Ok(record)
    }

    /// Apply `mutate` to the record with `id` and persist the collection.
    pub fn update(&self, id: RecordId, mutate: impl FnOnce(&mut T)) -> Result<T> {
        let mut records = self.list();
        let Some(record) = records.iter_mut().find(|record| record.id() == id) else {
            return Err(Error::NotFound(id.to_string()));
        };
        mutate(record);
        let updated = record.clone();
        self.store.set(T::STORAGE_KEY, &records);
        Ok(updated)
    }

    /// Remove the record with `id`.
    ///
    /// An unknown id is reported without touching storage.
    pub fn remove(&self, id: RecordId) -> Result<()> {
        let mut records = self.list();
        let before = records.len();
        records.retain(|record| record.id() != id);
        if records.len() == before {
            return Err(Error::NotFound(id.to_string()));
        }
        self.store.set(T::STORAGE_KEY, &records);
        Ok(())
    }
}

impl CollectionRepository<'_, Task> {
    /// Flip the completion state of the task with `id`.
    ///
    /// Toggling twice restores the original state.
    pub fn toggle(&self, id: RecordId) -> Result<Task> {
        self.update(id, |task| task.completed = !task.completed)
    }

    /// Replace the text of the task with `id`.
    ///
    /// Empty input is rejected. Text identical to the current value
    /// returns the task as-is without a storage write; `id` and
    /// `created_at` are never reassigned.
    pub fn edit(&self, id: RecordId, text: &str) -> Result<Task> {
        let text = normalize_required(text).ok_or(Error::EmptyText)?;
        let mut tasks = self.list();
        let Some(task) = tasks.iter_mut().find(|task| task.id == id) else {
            return Err(Error::NotFound(id.to_string()));
        };
        if task.text == text {
            return Ok(task.clone());
        }
        task.text = text;
        let updated = task.clone();
        self.store.set(Task::STORAGE_KEY, &tasks);
        Ok(updated)
    }
}
