use std::collections::HashSet;
use std::sync::{Mutex, PoisonError, RwLock};

use super::errors::SupplyError;
use super::model::Supply;
use crate::domain::shared::value_objects::SupplyId;

#[derive(Debug, Default)]
struct CacheState {
    supplies: Vec<Supply>,
    is_editor_open: bool,
    active_id: Option<SupplyId>,
    is_loading: bool,
    last_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum MutationKey {
    Create,
    Record(SupplyId),
}

/// Single authoritative in-memory state for the session: the supply
/// records in server return order, the editor coordination flags, and the
/// loading/error pair shared by all synchronized operations.
///
/// Overlapping mutations on the same record are rejected through the
/// in-flight set rather than raced; `fetch_all` stays unfenced, the last
/// response wins.
#[derive(Default)]
pub struct SupplyCache {
    state: RwLock<CacheState>,
    in_flight: Mutex<HashSet<MutationKey>>,
}

/// Releases the per-record mutation slot when dropped.
pub struct MutationGuard<'a> {
    cache: &'a SupplyCache,
    key: MutationKey,
}

impl std::fmt::Debug for MutationGuard<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MutationGuard")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl Drop for MutationGuard<'_> {
    fn drop(&mut self) {
        self.cache
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.key);
    }
}

impl SupplyCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, CacheState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, CacheState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn supplies(&self) -> Vec<Supply> {
        self.read().supplies.clone()
    }

    pub fn find(&self, id: &SupplyId) -> Option<Supply> {
        self.read().supplies.iter().find(|s| &s.id == id).cloned()
    }

    pub fn is_editor_open(&self) -> bool {
        self.read().is_editor_open
    }

    pub fn active_id(&self) -> Option<SupplyId> {
        self.read().active_id.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.read().is_loading
    }

    pub fn last_error(&self) -> Option<String> {
        self.read().last_error.clone()
    }

    pub fn open_editor(&self) {
        self.write().is_editor_open = true;
    }

    pub fn close_editor(&self) {
        let mut state = self.write();
        state.is_editor_open = false;
        state.active_id = None;
    }

    /// Marks a record for editing and opens the editor. The id is not
    /// checked against the records: a missing id is the caller's create
    /// fallback, not an error.
    pub fn select_for_edit(&self, id: SupplyId) {
        let mut state = self.write();
        state.active_id = Some(id);
        state.is_editor_open = true;
    }

    /// Restores a persisted snapshot. Touches only the records, never the
    /// coordination flags.
    pub fn restore(&self, supplies: Vec<Supply>) {
        self.write().supplies = supplies;
    }

    /// Phase 1 of every synchronized operation: clear the previous error
    /// and mark the cache loading.
    pub fn begin_operation(&self) {
        let mut state = self.write();
        state.is_loading = true;
        state.last_error = None;
    }

    /// Phase 3, failure: committed records stay untouched.
    pub fn fail_operation(&self, message: &str) {
        let mut state = self.write();
        state.is_loading = false;
        state.last_error = Some(message.to_string());
    }

    pub fn complete_fetch(&self, supplies: Vec<Supply>) {
        let mut state = self.write();
        state.supplies = supplies;
        state.is_loading = false;
    }

    pub fn complete_create(&self, supply: Supply) {
        let mut state = self.write();
        state.supplies.push(supply);
        state.is_loading = false;
    }

    /// Replaces the matching record wholesale with the server's
    /// representation and clears the active selection.
    pub fn complete_update(&self, supply: Supply) {
        let mut state = self.write();
        if let Some(existing) = state.supplies.iter_mut().find(|s| s.id == supply.id) {
            *existing = supply;
        }
        state.is_loading = false;
        state.active_id = None;
    }

    /// Removes the matching record. Tolerates an id that is not present
    /// locally; the remote call was authoritative.
    pub fn complete_delete(&self, id: &SupplyId) {
        let mut state = self.write();
        state.supplies.retain(|s| &s.id != id);
        state.is_loading = false;
    }

    /// Claims the mutation slot for an existing record, or fails fast
    /// when an operation on that record is still outstanding.
    pub fn begin_mutation(&self, id: &SupplyId) -> Result<MutationGuard<'_>, SupplyError> {
        self.claim(MutationKey::Record(id.clone()))
    }

    /// Claims the creation slot; there is no id yet to key on.
    pub fn begin_creation(&self) -> Result<MutationGuard<'_>, SupplyError> {
        self.claim(MutationKey::Create)
    }

    fn claim(&self, key: MutationKey) -> Result<MutationGuard<'_>, SupplyError> {
        let mut in_flight = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if !in_flight.insert(key.clone()) {
            return Err(SupplyError::OperationInFlight);
        }
        Ok(MutationGuard { cache: self, key })
    }
}
