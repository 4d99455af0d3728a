use serde::{Deserialize, Serialize};

use super::errors::SessionError;

/// Operator credentials for the remote login endpoint.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self, SessionError> {
        let username = username.into();
        let password = password.into();

        if username.trim().is_empty() || password.is_empty() {
            return Err(SessionError::MissingCredentials);
        }

        Ok(Self { username, password })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: i64,
    pub username: String,
}

/// An authenticated session as returned by the remote login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserAccount,
}
