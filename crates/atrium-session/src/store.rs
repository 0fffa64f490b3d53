//! Session token storage.
//!
//! Holds the current raw token in memory and, when opened on a path,
//! mirrors it to a small JSON file so a session survives restarts.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// On-disk shape of the session file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(default)]
    token: Option<String>,
}

/// Thread-safe holder of the current session token.
#[derive(Debug, Default)]
pub struct SessionStore {
    token: RwLock<Option<String>>,
    path: Option<PathBuf>,
}

impl SessionStore {
    /// Create a store that keeps the token in memory only.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Open a file-backed store.
    ///
    /// A missing file yields an empty store. An unreadable or unparsable
    /// file also yields an empty store, with a warning.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let token = Self::load(&path);
        Self {
            token: RwLock::new(token),
            path: Some(path),
        }
    }

    fn load(path: &Path) -> Option<String> {
        if !path.exists() {
            tracing::debug!(?path, "Session file not found");
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<SessionFile>(&contents) {
                Ok(file) => {
                    tracing::debug!(?path, "Loaded session file");
                    file.token
                }
                Err(e) => {
                    tracing::warn!(?path, error = %e, "Failed to parse session file, ignoring");
                    None
                }
            },
            Err(e) => {
                tracing::warn!(?path, error = %e, "Failed to read session file, ignoring");
                None
            }
        }
    }

    /// Backing file path, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Current raw token.
    pub fn get(&self) -> Option<String> {
        self.token.read().clone()
    }

    /// Replace the token and persist it.
    ///
    /// The in-memory token is updated even if persisting fails.
    pub fn set(&self, token: String) -> Result<()> {
        *self.token.write() = Some(token.clone());

        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(&SessionFile { token: Some(token) })?;
        fs::write(path, contents)?;

        tracing::debug!(?path, "Saved session file");
        Ok(())
    }

    /// Drop the token and remove the session file.
    pub fn clear(&self) -> Result<()> {
        *self.token.write() = None;

        if let Some(path) = &self.path {
            if path.exists() {
                fs::remove_file(path)?;
                tracing::debug!(?path, "Removed session file");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_roundtrip() {
        let store = SessionStore::in_memory();
        assert!(store.get().is_none());

        store.set("a.b.c".into()).unwrap();
        assert_eq!(store.get().as_deref(), Some("a.b.c"));

        store.clear().unwrap();
        assert!(store.get().is_none());
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(dir.path().join("session.json"));
        assert!(store.get().is_none());
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let store = SessionStore::open(&path);
        store.set("x.y.z".into()).unwrap();
        assert!(path.exists());

        let reopened = SessionStore::open(&path);
        assert_eq!(reopened.get().as_deref(), Some("x.y.z"));
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = SessionStore::open(&path);
        store.set("x.y.z".into()).unwrap();
        store.clear().unwrap();

        assert!(!path.exists());
        assert!(SessionStore::open(&path).get().is_none());
    }

    #[test]
    fn test_corrupt_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{ not json").unwrap();

        let store = SessionStore::open(&path);
        assert!(store.get().is_none());
        assert_eq!(store.path(), Some(path.as_path()));
    }
}
