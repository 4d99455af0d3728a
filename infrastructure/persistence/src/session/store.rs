use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use business::domain::errors::SnapshotError;
use business::domain::session::model::Session;
use business::domain::session::store::SessionStore;

use crate::storage::StorageLayout;

/// Session kept in its own file, written at login and removed at logout.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(layout: &StorageLayout) -> Self {
        Self {
            path: layout.session_path(),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<Session>, SnapshotError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path).map_err(|_| SnapshotError::Io)?;
        let session = serde_json::from_str(&raw).map_err(|_| SnapshotError::Corrupted)?;

        Ok(Some(session))
    }

    fn save(&self, session: &Session) -> Result<(), SnapshotError> {
        let raw = serde_json::to_string_pretty(session).map_err(|_| SnapshotError::Io)?;
        fs::write(&self.path, raw).map_err(|_| SnapshotError::Io)
    }

    fn clear(&self) -> Result<(), SnapshotError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(_) => Err(SnapshotError::Io),
        }
    }
}
