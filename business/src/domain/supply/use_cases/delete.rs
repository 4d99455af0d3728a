use async_trait::async_trait;

use crate::domain::shared::value_objects::SupplyId;
use crate::domain::supply::errors::SupplyError;

pub struct DeleteSupplyParams {
    pub id: SupplyId,
}

#[async_trait]
pub trait DeleteSupplyUseCase: Send + Sync {
    async fn execute(&self, params: DeleteSupplyParams) -> Result<(), SupplyError>;
}
