//! Storage layer: key-value backends and the typed adapter
//!
//! The app persists everything through a synchronous string key-value
//! capability. [`StorageBackend`] is that capability; [`KvStore`] layers
//! JSON (de)serialization and the uniform corruption policy on top. Every
//! value is read and written whole under its key, and the backends offer
//! last-write-wins semantics per key with no compare-and-swap. Two stores
//! over the same directory behave like two browser tabs sharing local
//! storage: concurrent read-modify-write cycles can drop one writer's
//! update, and that is accepted behavior.

mod file;
mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;

/// Storage key holding the current user's profile
pub const USER_KEY: &str = "currentUser";

/// Deprecated profile key, mirrored on every save and cleared on logout so
/// older builds that still read it stay consistent
pub const LEGACY_USER_KEY: &str = "flowtrack_user";

/// Synchronous string key-value storage capability.
///
/// Implementations never fail from the caller's point of view: a backend
/// that cannot read reports the key as absent, and one that cannot write
/// logs the problem and drops the value. The app treats storage as
/// best-effort local state, not a transactional database.
pub trait StorageBackend: Send + Sync {
    /// Read the raw string stored under `key`, if any
    fn read(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any existing value
    fn write(&self, key: &str, value: &str);

    /// Remove `key`; removing an absent key is a no-op
    fn delete(&self, key: &str);
}

/// Typed adapter over a [`StorageBackend`].
///
/// Owns serialization and the corruption policy: a stored value that fails
/// to parse is logged and reported as absent, so callers see `Option` and
/// never a storage error. Higher layers re-create missing state from
/// defaults instead of crashing on bad bytes.
pub struct KvStore {
    backend: Box<dyn StorageBackend>,
}

impl KvStore {
    /// Wrap an arbitrary backend
    #[must_use]
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// In-memory store, used by tests and throwaway sessions
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryBackend::new()))
    }

    /// File-backed store rooted at `dir`, one JSON document per key
    pub fn open(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        Ok(Self::new(Box::new(FileBackend::open(dir)?)))
    }

    /// Raw access to the underlying backend
    #[must_use]
    pub fn backend(&self) -> &dyn StorageBackend {
        self.backend.as_ref()
    }

    /// Read and parse the value under `key`.
    ///
    /// Returns `None` when the key is absent or its value does not parse
    /// as `T`. A parse failure is logged as a warning and then treated
    /// exactly like absence.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.backend.read(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::warn!("Discarding corrupted value under {key}: {error}");
                None
            }
        }
    }

    /// Serialize `value` and store it whole under `key`.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.backend.write(key, &raw),
            Err(error) => {
                tracing::error!("Failed to serialize value for {key}: {error}");
            }
        }
    }

    /// Remove `key` and its value
    pub fn remove(&self, key: &str) {
        self.backend.delete(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key_is_none() {
        let store = KvStore::in_memory();
        assert_eq!(store.get::<Vec<String>>("flowtrack_tasks"), None);
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let store = KvStore::in_memory();
        store.set("flowtrack_tasks", &vec!["a".to_string(), "b".to_string()]);
        assert_eq!(
            store.get::<Vec<String>>("flowtrack_tasks"),
            Some(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_corrupted_value_reads_as_none() {
        let store = KvStore::in_memory();
        store.backend.write("flowtrack_tasks", "{definitely not json");
        assert_eq!(store.get::<Vec<String>>("flowtrack_tasks"), None);
    }

    #[test]
    fn test_wrong_shape_reads_as_none() {
        let store = KvStore::in_memory();
        store.set("flowtrack_tasks", &42);
        assert_eq!(store.get::<Vec<String>>("flowtrack_tasks"), None);
    }

    #[test]
    fn test_remove_deletes_value() {
        let store = KvStore::in_memory();
        store.set("currentUser", &"ann".to_string());
        store.remove("currentUser");
        assert_eq!(store.get::<String>("currentUser"), None);
    }

    #[test]
    fn test_remove_absent_key_is_noop() {
        let store = KvStore::in_memory();
        store.remove("currentUser");
        assert_eq!(store.get::<String>("currentUser"), None);
    }
}
