use async_trait::async_trait;

use crate::domain::shared::value_objects::SupplyId;
use crate::domain::supply::errors::SupplyError;
use crate::domain::supply::model::Supply;

pub struct GetSupplyByIdParams {
    pub id: SupplyId,
}

#[async_trait]
pub trait GetSupplyByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetSupplyByIdParams) -> Result<Supply, SupplyError>;
}
