use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use business::domain::errors::RemoteError;
use business::domain::session::gateway::AuthGateway;
use business::domain::session::model::{Credentials, Session, UserAccount};

use crate::client::ApiClient;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
    user: LoginUser,
}

#[derive(Debug, Deserialize)]
struct LoginUser {
    id: i64,
    username: String,
}

pub struct AuthGatewayHttp {
    api: ApiClient,
}

impl AuthGatewayHttp {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AuthGateway for AuthGatewayHttp {
    async fn login(&self, credentials: &Credentials) -> Result<Session, RemoteError> {
        let response = self
            .api
            .client
            .post(self.api.login_url())
            .json(&LoginRequest {
                username: &credentials.username,
                password: &credentials.password,
            })
            .send()
            .await
            .map_err(|_| RemoteError::Unreachable)?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(RemoteError::Unauthorized);
            }
            status if !status.is_success() => return Err(RemoteError::Rejected),
            _ => {}
        }

        let body: LoginResponse = response
            .json()
            .await
            .map_err(|_| RemoteError::MalformedResponse)?;

        Ok(Session {
            token: body.token,
            user: UserAccount {
                id: body.user.id,
                username: body.user.username,
            },
        })
    }
}
