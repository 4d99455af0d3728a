use async_trait::async_trait;
use reqwest::StatusCode;

use business::domain::errors::RemoteError;
use business::domain::shared::value_objects::SupplyId;
use business::domain::supply::model::{DraftSupply, Supply};
use business::domain::supply::repository::SupplyRepository;

use crate::client::ApiClient;

use super::entity::{SupplyEntity, SupplyRequest};

pub struct SupplyRepositoryHttp {
    api: ApiClient,
}

impl SupplyRepositoryHttp {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// A 401 means the token is gone or expired: the session context is
    /// invalidated so the console forces a fresh login.
    fn map_status(&self, status: StatusCode) -> RemoteError {
        match status {
            StatusCode::UNAUTHORIZED => {
                self.api.session.invalidate();
                RemoteError::Unauthorized
            }
            StatusCode::NOT_FOUND => RemoteError::NotFound,
            _ => RemoteError::Rejected,
        }
    }

    fn check(&self, response: reqwest::Response) -> Result<reqwest::Response, RemoteError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(self.map_status(response.status()))
        }
    }
}

#[async_trait]
impl SupplyRepository for SupplyRepositoryHttp {
    async fn get_all(&self) -> Result<Vec<Supply>, RemoteError> {
        let response = self
            .api
            .authorized(self.api.client.get(self.api.supplies_url()))
            .send()
            .await
            .map_err(|_| RemoteError::Unreachable)?;

        let entities: Vec<SupplyEntity> = self
            .check(response)?
            .json()
            .await
            .map_err(|_| RemoteError::MalformedResponse)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: &SupplyId) -> Result<Supply, RemoteError> {
        let response = self
            .api
            .authorized(self.api.client.get(self.api.supply_url(id)))
            .send()
            .await
            .map_err(|_| RemoteError::Unreachable)?;

        let entity: SupplyEntity = self
            .check(response)?
            .json()
            .await
            .map_err(|_| RemoteError::MalformedResponse)?;

        Ok(entity.into_domain())
    }

    async fn create(&self, draft: &DraftSupply) -> Result<Supply, RemoteError> {
        let response = self
            .api
            .authorized(self.api.client.post(self.api.supplies_url()))
            .json(&SupplyRequest::from_draft(draft))
            .send()
            .await
            .map_err(|_| RemoteError::Unreachable)?;

        let entity: SupplyEntity = self
            .check(response)?
            .json()
            .await
            .map_err(|_| RemoteError::MalformedResponse)?;

        Ok(entity.into_domain())
    }

    async fn update(&self, id: &SupplyId, draft: &DraftSupply) -> Result<Supply, RemoteError> {
        let response = self
            .api
            .authorized(self.api.client.put(self.api.supply_url(id)))
            .json(&SupplyRequest::from_draft(draft))
            .send()
            .await
            .map_err(|_| RemoteError::Unreachable)?;

        let entity: SupplyEntity = self
            .check(response)?
            .json()
            .await
            .map_err(|_| RemoteError::MalformedResponse)?;

        Ok(entity.into_domain())
    }

    async fn delete(&self, id: &SupplyId) -> Result<(), RemoteError> {
        let response = self
            .api
            .authorized(self.api.client.delete(self.api.supply_url(id)))
            .send()
            .await
            .map_err(|_| RemoteError::Unreachable)?;

        self.check(response)?;
        Ok(())
    }
}
