use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RemoteError;
use crate::domain::logger::Logger;
use crate::domain::session::context::SessionContext;
use crate::domain::session::errors::SessionError;
use crate::domain::session::gateway::AuthGateway;
use crate::domain::session::model::{Credentials, Session};
use crate::domain::session::store::SessionStore;
use crate::domain::session::use_cases::login::{LoginParams, LoginUseCase};

pub struct LoginUseCaseImpl {
    pub gateway: Arc<dyn AuthGateway>,
    pub context: Arc<SessionContext>,
    pub sessions: Arc<dyn SessionStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Result<Session, SessionError> {
        let credentials = Credentials::new(params.username, params.password)?;

        self.logger
            .info(&format!("Logging in as: {}", credentials.username));

        let session = self
            .gateway
            .login(&credentials)
            .await
            .map_err(|e| match e {
                RemoteError::Unauthorized => SessionError::InvalidCredentials,
                other => SessionError::Remote(other),
            })?;

        self.context.establish(session.clone());

        // the in-memory session is already valid; persistence is a mirror
        if let Err(err) = self.sessions.save(&session) {
            self.logger.warn(&format!("Session persist failed: {err}"));
        }

        self.logger
            .info(&format!("Logged in as: {}", session.user.username));
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::SnapshotError;
    use crate::domain::session::model::UserAccount;
    use mockall::mock;

    mock! {
        pub Gateway {}

        #[async_trait]
        impl AuthGateway for Gateway {
            async fn login(&self, credentials: &Credentials) -> Result<Session, RemoteError>;
        }
    }

    mock! {
        pub Sessions {}

        impl SessionStore for Sessions {
            fn load(&self) -> Result<Option<Session>, SnapshotError>;
            fn save(&self, session: &Session) -> Result<(), SnapshotError>;
            fn clear(&self) -> Result<(), SnapshotError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn session() -> Session {
        Session {
            token: "jwt-token".to_string(),
            user: UserAccount {
                id: 1,
                username: "admin".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn should_establish_context_and_persist_session_on_success() {
        let context = Arc::new(SessionContext::new());

        let mut mock_gateway = MockGateway::new();
        mock_gateway.expect_login().returning(|_| Ok(session()));
        let mut mock_sessions = MockSessions::new();
        mock_sessions.expect_save().times(1).returning(|_| Ok(()));

        let use_case = LoginUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            context: context.clone(),
            sessions: Arc::new(mock_sessions),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(LoginParams {
                username: "admin".to_string(),
                password: "secret".to_string(),
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(context.token(), Some("jwt-token".to_string()));
    }

    #[tokio::test]
    async fn should_map_unauthorized_to_invalid_credentials() {
        let context = Arc::new(SessionContext::new());

        let mut mock_gateway = MockGateway::new();
        mock_gateway
            .expect_login()
            .returning(|_| Err(RemoteError::Unauthorized));
        let mut mock_sessions = MockSessions::new();
        mock_sessions.expect_save().never();

        let use_case = LoginUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            context: context.clone(),
            sessions: Arc::new(mock_sessions),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(LoginParams {
                username: "admin".to_string(),
                password: "wrong".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            SessionError::InvalidCredentials
        ));
        assert!(!context.is_authenticated());
    }

    #[tokio::test]
    async fn should_reject_blank_credentials_without_calling_gateway() {
        let mut mock_gateway = MockGateway::new();
        mock_gateway.expect_login().never();
        let mock_sessions = MockSessions::new();

        let use_case = LoginUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            context: Arc::new(SessionContext::new()),
            sessions: Arc::new(mock_sessions),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(LoginParams {
                username: "".to_string(),
                password: "secret".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            SessionError::MissingCredentials
        ));
    }

    #[tokio::test]
    async fn should_stay_logged_in_when_session_persist_fails() {
        let context = Arc::new(SessionContext::new());

        let mut mock_gateway = MockGateway::new();
        mock_gateway.expect_login().returning(|_| Ok(session()));
        let mut mock_sessions = MockSessions::new();
        mock_sessions
            .expect_save()
            .returning(|_| Err(SnapshotError::Io));

        let use_case = LoginUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            context: context.clone(),
            sessions: Arc::new(mock_sessions),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(LoginParams {
                username: "admin".to_string(),
                password: "secret".to_string(),
            })
            .await;

        assert!(result.is_ok());
        assert!(context.is_authenticated());
    }
}
