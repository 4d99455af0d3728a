use crate::domain::errors::SnapshotError;

use super::model::Supply;

/// Durable mirror of the in-memory supply cache. Refreshed after every
/// successful mutation and restored at startup. Best-effort: a failed
/// write never rolls back committed in-memory state.
pub trait SnapshotStore: Send + Sync {
    fn load(&self) -> Result<Vec<Supply>, SnapshotError>;
    fn save(&self, supplies: &[Supply]) -> Result<(), SnapshotError>;
}
