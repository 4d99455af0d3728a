use std::sync::Arc;
use std::time::Duration;

use business::domain::session::context::SessionContext;
use business::domain::shared::value_objects::SupplyId;
use reqwest::Client;

/// Shared HTTP client configuration for the farm inventory API. The
/// session context is the only token source; there is no ambient lookup.
pub struct ApiClient {
    pub client: Client,
    pub base_url: String,
    pub session: Arc<SessionContext>,
}

impl ApiClient {
    pub fn new(base_url: String, session: Arc<SessionContext>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url,
            session,
        }
    }

    /// Builds the authorization header value for the current session.
    pub fn auth_header(&self) -> Option<String> {
        self.session.token().map(|token| format!("Bearer {}", token))
    }

    /// Attaches the bearer token to a request when a session is active.
    pub fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.auth_header() {
            Some(header) => request.header(reqwest::header::AUTHORIZATION, header),
            None => request,
        }
    }

    /// Returns the login endpoint URL.
    pub fn login_url(&self) -> String {
        format!("{}/login", self.base_url)
    }

    /// Returns the supplies collection endpoint URL.
    pub fn supplies_url(&self) -> String {
        format!("{}/supplies", self.base_url)
    }

    /// Returns the endpoint URL for a single supply.
    pub fn supply_url(&self, id: &SupplyId) -> String {
        format!("{}/supplies/{}", self.base_url, id)
    }
}
