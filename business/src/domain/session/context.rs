use std::sync::{PoisonError, RwLock};

use super::model::{Session, UserAccount};

/// Explicit session state handed to the data-access layer, replacing any
/// ambient token lookup. The remote adapter reads the token per request
/// and calls `invalidate` when the API answers 401, which forces the
/// operator through login again.
#[derive(Default)]
pub struct SessionContext {
    session: RwLock<Option<Session>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn establish(&self, session: Session) {
        *self
            .session
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(session);
    }

    pub fn invalidate(&self) {
        *self
            .session
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn token(&self) -> Option<String> {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|s| s.token.clone())
    }

    pub fn current_user(&self) -> Option<UserAccount> {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|s| s.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}
