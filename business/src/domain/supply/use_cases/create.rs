use async_trait::async_trait;

use crate::domain::supply::errors::SupplyError;
use crate::domain::supply::model::{DraftSupply, Supply};

pub struct CreateSupplyParams {
    pub draft: DraftSupply,
}

#[async_trait]
pub trait CreateSupplyUseCase: Send + Sync {
    async fn execute(&self, params: CreateSupplyParams) -> Result<Supply, SupplyError>;
}
