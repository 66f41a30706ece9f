//! Durable session storage
//!
//! The token store is the only shared mutable state in the client. It
//! is read synchronously before every request and written only by a
//! successful login or refresh, and cleared on logout or an
//! unrecoverable auth failure.

use crate::error::{CoreError, CoreResult};
use crate::session::Session;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;
use tracing::warn;

/// Durable key-value persistence of the [`Session`].
///
/// Implementations are infallible from the caller's perspective:
/// anything partial, corrupt, or unreadable degrades to `None`,
/// never a panic or an error.
pub trait TokenStore: Send + Sync {
    /// The current session, or `None` when any of its parts is
    /// missing or malformed.
    fn get(&self) -> Option<Session>;

    /// Persist the whole session. Other readers must never observe a
    /// partial write.
    fn set(&self, session: &Session);

    /// Remove the session entirely.
    fn clear(&self);

    /// Replace the access token in place after a refresh, keeping the
    /// refresh token and user snapshot. No-op when no session exists.
    fn set_access_token(&self, access_token: &str) {
        if let Some(mut session) = self.get() {
            session.access_token = access_token.to_string();
            self.set(&session);
        }
    }
}

/// Process-local store with no persistence. Used in tests and by
/// callers that manage durability themselves.
#[derive(Default)]
pub struct MemoryTokenStore {
    inner: RwLock<Option<Session>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<Session> {
        self.inner.read().ok().and_then(|guard| guard.clone())
    }

    fn set(&self, session: &Session) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = Some(session.clone());
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = None;
        }
    }
}

/// Store backed by a single JSON file, surviving process restarts the
/// way browser localStorage survives page reloads.
///
/// Writes go to a sibling temp file first and are moved into place, so
/// a concurrent reader sees either the old or the new session, never a
/// torn one.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform data directory for the application
    /// (e.g. `~/.local/share/optimach/session.json` on Linux).
    pub fn open_default() -> CoreResult<Self> {
        let dirs = directories::ProjectDirs::from("app", "optimach", "optimach")
            .ok_or_else(|| CoreError::invalid_config("no home directory available"))?;
        let dir = dirs.data_dir();
        fs::create_dir_all(dir)?;
        Ok(Self::at(dir.join("session.json")))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<Session> {
        let bytes = fs::read(&self.path).ok()?;
        match serde_json::from_slice(&bytes) {
            Ok(session) => Some(session),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "discarding unreadable session file");
                None
            }
        }
    }

    fn set(&self, session: &Session) {
        let tmp = self.path.with_extension("json.tmp");
        let result = serde_json::to_vec_pretty(session)
            .map_err(CoreError::from)
            .and_then(|bytes| {
                fs::write(&tmp, bytes)?;
                fs::rename(&tmp, &self.path)?;
                Ok(())
            });
        if let Err(err) = result {
            warn!(path = %self.path.display(), error = %err, "failed to persist session");
        }
    }

    fn clear(&self) {
        if let Err(err) = fs::remove_file(&self.path) {
            if err.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %self.path.display(), error = %err, "failed to remove session file");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::UserSnapshot;

    fn sample_session() -> Session {
        Session::new(
            "A1",
            "R1",
            UserSnapshot {
                id_user: 7,
                username: "alice".into(),
                has_completed_profile: false,
                is_admin: false,
                is_active: true,
            },
        )
    }

    fn temp_store() -> FileTokenStore {
        let path = std::env::temp_dir().join(format!("optimach-store-{}.json", uuid::Uuid::new_v4()));
        FileTokenStore::at(path)
    }

    #[test]
    fn memory_round_trip() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get(), None);

        let session = sample_session();
        store.set(&session);
        assert_eq!(store.get(), Some(session));

        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn set_access_token_keeps_rest_of_session() {
        let store = MemoryTokenStore::new();
        store.set(&sample_session());

        store.set_access_token("A2");
        let session = store.get().unwrap();
        assert_eq!(session.access_token, "A2");
        assert_eq!(session.refresh_token, "R1");
        assert_eq!(session.user.username, "alice");
    }

    #[test]
    fn set_access_token_without_session_is_noop() {
        let store = MemoryTokenStore::new();
        store.set_access_token("A2");
        assert_eq!(store.get(), None);
    }

    #[test]
    fn file_round_trip() {
        let store = temp_store();
        assert_eq!(store.get(), None);

        let session = sample_session();
        store.set(&session);
        assert_eq!(store.get(), Some(session));

        store.clear();
        assert_eq!(store.get(), None);
        // clearing twice is fine
        store.clear();
    }

    #[test]
    fn corrupt_file_reads_as_absent() {
        let store = temp_store();
        fs::write(store.path(), b"{not json").unwrap();
        assert_eq!(store.get(), None);
        store.clear();
    }
}
