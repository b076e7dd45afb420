//! Persisted session record
//!
//! The only durable state in the application: a single JSON file holding
//! the logged-in `User`. Written on login, deleted on logout, read once at
//! startup by the rehydration routine. A record that fails to parse is
//! treated as absent and deleted on the spot, so a corrupt file can never
//! wedge startup.

use std::path::{Path, PathBuf};

use crate::error::{Result, SessionError};
use crate::types::User;

/// File name under the data directory.
const SESSION_FILE: &str = "session.json";

/// Handle to the session record on disk.
///
/// Construct with [`SessionStore::open_default`] for the real location or
/// [`SessionStore::at`] to point at any path (tests use a temp directory).
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Open the session store at the default location.
    pub fn open_default() -> Result<Self> {
        Ok(Self {
            path: resolve_session_path()?,
        })
    }

    /// Open a session store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted record, if any.
    ///
    /// A missing file is `Ok(None)`. A file that exists but does not parse
    /// as a `User` is deleted and also reported as `Ok(None)` - malformed
    /// state self-heals rather than propagating.
    pub fn load(&self) -> Result<Option<User>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(SessionError::Io(err).into()),
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "Discarding malformed session record"
                );
                self.clear()?;
                Ok(None)
            }
        }
    }

    /// Write the record, creating parent directories as needed.
    pub fn save(&self, user: &User) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(SessionError::Io)?;
        }

        let raw = serde_json::to_string(user).map_err(SessionError::Malformed)?;
        std::fs::write(&self.path, raw).map_err(SessionError::Io)?;
        tracing::debug!(path = %self.path.display(), "Session record written");
        Ok(())
    }

    /// Delete the record. A record that is already gone is not an error.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(SessionError::Io(err).into()),
        }
    }
}

/// Resolve the session file path.
///
/// `SNAPBACK_SESSION` overrides everything (tilde-expanded); otherwise the
/// record lives under the platform data directory.
pub fn resolve_session_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("SNAPBACK_SESSION") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let data_dir = dirs::data_dir().ok_or(SessionError::NoDataDir)?;
    Ok(data_dir.join("snapback").join(SESSION_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn store_in(dir: &tempfile::TempDir) -> SessionStore {
        SessionStore::at(dir.path().join(SESSION_FILE))
    }

    #[test]
    fn test_load_absent_record_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let user = User::new("Maya", "maya@example.com");

        store.save(&user).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, Some(user));
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("nested").join("deeper").join(SESSION_FILE));

        store.save(&User::new("Maya", "maya@example.com")).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_malformed_record_self_heals() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        std::fs::write(store.path(), "{not json at all").unwrap();

        assert!(store.load().unwrap().is_none());
        // The bad file must be gone afterwards.
        assert!(!store.path().exists());
    }

    #[test]
    fn test_wrong_shape_record_self_heals() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        // Valid JSON, wrong shape.
        std::fs::write(store.path(), r#"{"points": 300}"#).unwrap();

        assert!(store.load().unwrap().is_none());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_clear_removes_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&User::new("Maya", "maya@example.com")).unwrap();
        store.clear().unwrap();

        assert!(!store.path().exists());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.clear().unwrap();
        store.clear().unwrap();
    }

    #[test]
    #[serial]
    fn test_resolve_path_honors_env_override() {
        std::env::set_var("SNAPBACK_SESSION", "/tmp/snapback-test/session.json");
        let path = resolve_session_path().unwrap();
        std::env::remove_var("SNAPBACK_SESSION");

        assert_eq!(path, PathBuf::from("/tmp/snapback-test/session.json"));
    }

    #[test]
    #[serial]
    fn test_resolve_path_defaults_under_data_dir() {
        std::env::remove_var("SNAPBACK_SESSION");
        let path = resolve_session_path().unwrap();

        assert!(path.ends_with(Path::new("snapback").join(SESSION_FILE)));
    }
}
