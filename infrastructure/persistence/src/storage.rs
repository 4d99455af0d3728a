use std::path::{Path, PathBuf};

use business::domain::errors::SnapshotError;

/// Fixed file layout of the console's local storage: one document per
/// namespace, the supply snapshot and the session kept under separate
/// keys.
#[derive(Debug, Clone)]
pub struct StorageLayout {
    root: PathBuf,
}

impl StorageLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates the storage directory if it does not exist yet.
    pub fn ensure(&self) -> Result<(), SnapshotError> {
        std::fs::create_dir_all(&self.root).map_err(|_| SnapshotError::Io)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn supplies_path(&self) -> PathBuf {
        self.root.join("supplies.json")
    }

    pub fn session_path(&self) -> PathBuf {
        self.root.join("session.json")
    }
}
