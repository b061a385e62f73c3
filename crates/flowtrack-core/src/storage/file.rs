//! File-backed storage: one JSON document per key

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::StorageBackend;

/// Directory-backed storage where key `k` lives at `<dir>/<k>.json`.
///
/// Writes go to a temp file and are renamed into place, so a concurrent
/// reader never observes a partially written value. Read, write, and
/// delete failures are logged and absorbed; callers see absence, never an
/// error.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Open the storage directory, creating it if needed
    pub fn open(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Directory this backend stores documents under
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", sanitize_key(key)))
    }

    fn write_atomic(&self, path: &Path, value: &str) -> std::io::Result<()> {
        let temp = temp_path(path);
        {
            let mut file = fs::File::create(&temp)?;
            file.write_all(value.as_bytes())?;
            file.flush()?;
        }
        fs::rename(&temp, path)
    }
}

/// Sibling temp path for `path`, unique per process.
///
/// Two processes writing the same key must never share a temp file, or
/// one rename can install the other's half-written document.
fn temp_path(path: &Path) -> PathBuf {
    path.with_extension(format!("json.tmp.{}", std::process::id()))
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        if !path.exists() {
            return None;
        }
        match fs::read_to_string(&path) {
            Ok(raw) => Some(raw),
            Err(error) => {
                tracing::warn!("Failed to read storage file for {key}: {error}");
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) {
        let path = self.path_for(key);
        if let Err(error) = self.write_atomic(&path, value) {
            tracing::error!("Failed to write storage file for {key}: {error}");
        }
    }

    fn delete(&self, key: &str) {
        let path = self.path_for(key);
        if path.exists() {
            if let Err(error) = fs::remove_file(&path) {
                tracing::warn!("Failed to delete storage file for {key}: {error}");
            }
        }
    }
}

/// Map a storage key to a safe file name.
///
/// Anything outside `[A-Za-z0-9_-]` becomes an underscore, and names are
/// capped at 100 characters. The app's own keys are short ASCII
/// identifiers that pass through unchanged.
fn sanitize_key(key: &str) -> String {
    let sanitized: String = key
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .take(100)
        .collect();

    if sanitized.is_empty() {
        "_".to_string()
    } else {
        sanitized
    }
}
