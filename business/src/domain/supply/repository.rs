use async_trait::async_trait;

use crate::domain::errors::RemoteError;
use crate::domain::shared::value_objects::SupplyId;

use super::model::{DraftSupply, Supply};

/// Remote data-access port for supplies. The remote API is authoritative;
/// every mutation returns the server's representation of the record.
#[async_trait]
pub trait SupplyRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Supply>, RemoteError>;
    async fn get_by_id(&self, id: &SupplyId) -> Result<Supply, RemoteError>;
    async fn create(&self, draft: &DraftSupply) -> Result<Supply, RemoteError>;
    async fn update(&self, id: &SupplyId, draft: &DraftSupply) -> Result<Supply, RemoteError>;
    async fn delete(&self, id: &SupplyId) -> Result<(), RemoteError>;
}
