use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::context::SessionContext;
use crate::domain::session::errors::SessionError;
use crate::domain::session::store::SessionStore;
use crate::domain::session::use_cases::logout::LogoutUseCase;

pub struct LogoutUseCaseImpl {
    pub context: Arc<SessionContext>,
    pub sessions: Arc<dyn SessionStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LogoutUseCase for LogoutUseCaseImpl {
    async fn execute(&self) -> Result<(), SessionError> {
        if !self.context.is_authenticated() {
            return Err(SessionError::NotLoggedIn);
        }

        self.context.invalidate();

        if let Err(err) = self.sessions.clear() {
            self.logger.warn(&format!("Session removal failed: {err}"));
        }

        self.logger.info("Logged out");
        Ok(())
    }
}
