use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::supply::cache::SupplyCache;
use crate::domain::supply::errors::SupplyError;
use crate::domain::supply::model::Supply;
use crate::domain::supply::repository::SupplyRepository;
use crate::domain::supply::snapshot::SnapshotStore;
use crate::domain::supply::use_cases::update::{UpdateSupplyParams, UpdateSupplyUseCase};

pub struct UpdateSupplyUseCaseImpl {
    pub cache: Arc<SupplyCache>,
    pub repository: Arc<dyn SupplyRepository>,
    pub snapshots: Arc<dyn SnapshotStore>,
    pub logger: Arc<dyn Logger>,
}

impl UpdateSupplyUseCaseImpl {
    fn mirror(&self) {
        if let Err(err) = self.snapshots.save(&self.cache.supplies()) {
            self.logger
                .warn(&format!("Supply snapshot write failed: {err}"));
        }
    }
}

#[async_trait]
impl UpdateSupplyUseCase for UpdateSupplyUseCaseImpl {
    async fn execute(&self, params: UpdateSupplyParams) -> Result<Supply, SupplyError> {
        // Surfaced to the caller without touching cache state: records and
        // last_error stay exactly as they were.
        let Some(active_id) = self.cache.active_id() else {
            self.logger.warn("Update requested with no active selection");
            return Err(SupplyError::NoActiveSelection);
        };

        let _guard = self.cache.begin_mutation(&active_id)?;

        self.logger.info(&format!("Updating supply: {active_id}"));
        self.cache.begin_operation();

        match self.repository.update(&active_id, &params.draft).await {
            Ok(supply) => {
                self.cache.complete_update(supply.clone());
                self.mirror();
                self.logger.info(&format!("Supply updated: {}", supply.id));
                Ok(supply)
            }
            Err(err) => {
                self.cache.fail_operation(&err.to_string());
                self.logger.error(&format!("Updating supply failed: {err}"));
                Err(err.into())
            }
        }
    }
}
