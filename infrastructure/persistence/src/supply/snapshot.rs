use std::fs;
use std::path::PathBuf;

use business::domain::errors::SnapshotError;
use business::domain::supply::model::Supply;
use business::domain::supply::snapshot::SnapshotStore;

use crate::storage::StorageLayout;

use super::entity::SupplyRecord;

/// File-backed supply mirror. Writes rewrite the whole document; the
/// last write wins and there is no rollback on a partial failure.
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(layout: &StorageLayout) -> Self {
        Self {
            path: layout.supplies_path(),
        }
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn load(&self) -> Result<Vec<Supply>, SnapshotError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&self.path).map_err(|_| SnapshotError::Io)?;
        let records: Vec<SupplyRecord> =
            serde_json::from_str(&raw).map_err(|_| SnapshotError::Corrupted)?;

        Ok(records.into_iter().map(|r| r.into_domain()).collect())
    }

    fn save(&self, supplies: &[Supply]) -> Result<(), SnapshotError> {
        let records: Vec<SupplyRecord> = supplies.iter().map(SupplyRecord::from_domain).collect();
        let raw = serde_json::to_string_pretty(&records).map_err(|_| SnapshotError::Io)?;

        fs::write(&self.path, raw).map_err(|_| SnapshotError::Io)
    }
}
