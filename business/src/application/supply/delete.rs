use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::supply::cache::SupplyCache;
use crate::domain::supply::errors::SupplyError;
use crate::domain::supply::repository::SupplyRepository;
use crate::domain::supply::snapshot::SnapshotStore;
use crate::domain::supply::use_cases::delete::{DeleteSupplyParams, DeleteSupplyUseCase};

pub struct DeleteSupplyUseCaseImpl {
    pub cache: Arc<SupplyCache>,
    pub repository: Arc<dyn SupplyRepository>,
    pub snapshots: Arc<dyn SnapshotStore>,
    pub logger: Arc<dyn Logger>,
}

impl DeleteSupplyUseCaseImpl {
    fn mirror(&self) {
        if let Err(err) = self.snapshots.save(&self.cache.supplies()) {
            self.logger
                .warn(&format!("Supply snapshot write failed: {err}"));
        }
    }
}

#[async_trait]
impl DeleteSupplyUseCase for DeleteSupplyUseCaseImpl {
    async fn execute(&self, params: DeleteSupplyParams) -> Result<(), SupplyError> {
        let _guard = self.cache.begin_mutation(&params.id)?;

        self.logger.info(&format!("Deleting supply: {}", params.id));
        self.cache.begin_operation();

        match self.repository.delete(&params.id).await {
            Ok(()) => {
                self.cache.complete_delete(&params.id);
                self.mirror();
                self.logger.info(&format!("Supply deleted: {}", params.id));
                Ok(())
            }
            Err(err) => {
                self.cache.fail_operation(&err.to_string());
                self.logger.error(&format!("Deleting supply failed: {err}"));
                Err(err.into())
            }
        }
    }
}
