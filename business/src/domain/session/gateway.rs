use async_trait::async_trait;

use crate::domain::errors::RemoteError;

use super::model::{Credentials, Session};

/// Remote authentication port.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<Session, RemoteError>;
}
