use async_trait::async_trait;

use crate::domain::supply::errors::SupplyError;
use crate::domain::supply::model::{DraftSupply, Supply};

/// The record being updated is the cache's active selection, not a
/// parameter: the editor flow sets it through `select_for_edit`.
pub struct UpdateSupplyParams {
    pub draft: DraftSupply,
}

#[async_trait]
pub trait UpdateSupplyUseCase: Send + Sync {
    async fn execute(&self, params: UpdateSupplyParams) -> Result<Supply, SupplyError>;
}
