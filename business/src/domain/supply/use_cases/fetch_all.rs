use async_trait::async_trait;

use crate::domain::supply::errors::SupplyError;
use crate::domain::supply::model::Supply;

#[async_trait]
pub trait FetchSuppliesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Supply>, SupplyError>;
}
