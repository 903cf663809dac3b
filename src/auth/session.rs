use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Session file name in the data directory
const SESSION_FILE: &str = "session.json";

/// A saved admin session. The token is the credential; username and
/// creation time are kept for status display only. Validity is decided by
/// the server on each request, never locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    pub token: String,
    pub username: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl SessionData {
    pub fn new(token: impl Into<String>, username: Option<String>) -> Self {
        Self {
            token: token.into(),
            username,
            created_at: Utc::now(),
        }
    }
}

/// Storage for the single admin session.
///
/// This is the only thing distinguishing "logged in" from "logged out" on
/// the client. `get` never fails: a store that cannot be read behaves as
/// logged out. Writes are last-writer-wins; another process sharing the
/// store finds out about a teardown on its next request.
pub trait SessionStore: Send + Sync {
    fn set(&self, data: SessionData) -> Result<()>;
    fn get(&self) -> Option<SessionData>;
    fn clear(&self) -> Result<()>;

    /// The bearer token of the current session, if any
    fn token(&self) -> Option<String> {
        self.get().map(|d| d.token)
    }
}

/// Session store persisted as `session.json` under the given directory,
/// with an in-memory copy so reads never touch the filesystem.
pub struct FileSessionStore {
    dir: PathBuf,
    current: RwLock<Option<SessionData>>,
}

impl FileSessionStore {
    /// Open the store, loading any previously saved session. An unreadable
    /// or corrupt session file is treated as no session.
    pub fn open(dir: PathBuf) -> Self {
        let current = Self::read_file(&dir.join(SESSION_FILE));
        Self {
            dir,
            current: RwLock::new(current),
        }
    }

    fn session_path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE)
    }

    fn read_file(path: &Path) -> Option<SessionData> {
        let contents = std::fs::read_to_string(path).ok()?;
        serde_json::from_str(&contents).ok()
    }
}

impl SessionStore for FileSessionStore {
    fn set(&self, data: SessionData) -> Result<()> {
        let path = self.session_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&data)?;
        std::fs::write(&path, contents).context("Failed to write session file")?;
        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(data);
        Ok(())
    }

    fn get(&self) -> Option<SessionData> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn clear(&self) -> Result<()> {
        self.current
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        let path = self.session_path();
        if path.exists() {
            std::fs::remove_file(&path).context("Failed to remove session file")?;
        }
        Ok(())
    }
}

/// In-memory store for tests
#[cfg(test)]
pub struct MemorySessionStore {
    current: RwLock<Option<SessionData>>,
}

#[cfg(test)]
impl MemorySessionStore {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(None),
        }
    }
}

#[cfg(test)]
impl SessionStore for MemorySessionStore {
    fn set(&self, data: SessionData) -> Result<()> {
        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(data);
        Ok(())
    }

    fn get(&self) -> Option<SessionData> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn clear(&self) -> Result<()> {
        self.current
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join("clinic-admin-tests")
            .join(name)
            .join(format!("{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_get_is_empty_without_session_file() {
        let store = FileSessionStore::open(temp_store_dir("empty"));
        assert!(store.get().is_none());
        assert!(store.token().is_none());
    }

    #[test]
    fn test_set_then_get_returns_token() {
        let store = FileSessionStore::open(temp_store_dir("set-get"));
        store
            .set(SessionData::new("abc123", Some("admin".to_string())))
            .unwrap();
        assert_eq!(store.token().as_deref(), Some("abc123"));
    }

    #[test]
    fn test_session_survives_reopen() {
        let dir = temp_store_dir("reopen");
        let store = FileSessionStore::open(dir.clone());
        store.set(SessionData::new("abc123", None)).unwrap();
        drop(store);

        let reopened = FileSessionStore::open(dir);
        assert_eq!(reopened.token().as_deref(), Some("abc123"));
    }

    #[test]
    fn test_clear_removes_session_and_file() {
        let dir = temp_store_dir("clear");
        let store = FileSessionStore::open(dir.clone());
        store.set(SessionData::new("abc123", None)).unwrap();
        store.clear().unwrap();
        assert!(store.get().is_none());

        // Nothing comes back after reopening either
        let reopened = FileSessionStore::open(dir);
        assert!(reopened.get().is_none());
    }

    #[test]
    fn test_clear_on_empty_store_is_ok() {
        let store = FileSessionStore::open(temp_store_dir("clear-empty"));
        assert!(store.clear().is_ok());
    }

    #[test]
    fn test_corrupt_session_file_reads_as_logged_out() {
        let dir = temp_store_dir("corrupt");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("session.json"), "not json").unwrap();
        let store = FileSessionStore::open(dir);
        assert!(store.get().is_none());
    }

    #[test]
    fn test_memory_store_contract() {
        let store = MemorySessionStore::new();
        assert!(store.get().is_none());
        store.set(SessionData::new("t", None)).unwrap();
        assert_eq!(store.token().as_deref(), Some("t"));
        store.clear().unwrap();
        assert!(store.get().is_none());
    }
}
