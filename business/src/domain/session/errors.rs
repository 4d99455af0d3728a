#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session.missing_credentials")]
    MissingCredentials,
    #[error("session.invalid_credentials")]
    InvalidCredentials,
    #[error("session.not_logged_in")]
    NotLoggedIn,
    #[error("remote.request_failed")]
    Remote(#[from] crate::domain::errors::RemoteError),
}
