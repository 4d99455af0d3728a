use crate::domain::errors::SnapshotError;

use super::model::Session;

/// Durable session storage, kept under its own key separate from the
/// supply snapshot. Saved at login, removed at logout, restored at
/// startup.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<Session>, SnapshotError>;
    fn save(&self, session: &Session) -> Result<(), SnapshotError>;
    fn clear(&self) -> Result<(), SnapshotError>;
}
