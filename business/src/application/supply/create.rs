use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::supply::cache::SupplyCache;
use crate::domain::supply::errors::SupplyError;
use crate::domain::supply::model::Supply;
use crate::domain::supply::repository::SupplyRepository;
use crate::domain::supply::snapshot::SnapshotStore;
use crate::domain::supply::use_cases::create::{CreateSupplyParams, CreateSupplyUseCase};

pub struct CreateSupplyUseCaseImpl {
    pub cache: Arc<SupplyCache>,
    pub repository: Arc<dyn SupplyRepository>,
    pub snapshots: Arc<dyn SnapshotStore>,
    pub logger: Arc<dyn Logger>,
}

impl CreateSupplyUseCaseImpl {
    fn mirror(&self) {
        if let Err(err) = self.snapshots.save(&self.cache.supplies()) {
            self.logger
                .warn(&format!("Supply snapshot write failed: {err}"));
        }
    }
}

#[async_trait]
impl CreateSupplyUseCase for CreateSupplyUseCaseImpl {
    async fn execute(&self, params: CreateSupplyParams) -> Result<Supply, SupplyError> {
        let _guard = self.cache.begin_creation()?;

        self.logger
            .info(&format!("Creating supply: {}", params.draft.name));
        self.cache.begin_operation();

        match self.repository.create(&params.draft).await {
            Ok(supply) => {
                self.cache.complete_create(supply.clone());
                self.mirror();
                self.logger
                    .info(&format!("Supply created with id: {}", supply.id));
                Ok(supply)
            }
            Err(err) => {
                self.cache.fail_operation(&err.to_string());
                self.logger.error(&format!("Creating supply failed: {err}"));
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{RemoteError, SnapshotError};
    use crate::domain::shared::value_objects::{EntryDate, SupplyId};
    use crate::domain::supply::model::{DraftSupply, DraftSupplyProps};
    use crate::domain::supply::value_objects::{GrowthStage, SupplyCategory, UnitOfMeasure};
    use mockall::mock;

    mock! {
        pub SupplyRepo {}

        #[async_trait]
        impl SupplyRepository for SupplyRepo {
            async fn get_all(&self) -> Result<Vec<Supply>, RemoteError>;
            async fn get_by_id(&self, id: &SupplyId) -> Result<Supply, RemoteError>;
            async fn create(&self, draft: &DraftSupply) -> Result<Supply, RemoteError>;
            async fn update(&self, id: &SupplyId, draft: &DraftSupply) -> Result<Supply, RemoteError>;
            async fn delete(&self, id: &SupplyId) -> Result<(), RemoteError>;
        }
    }

    mock! {
        pub Snapshots {}

        impl SnapshotStore for Snapshots {
            fn load(&self) -> Result<Vec<Supply>, SnapshotError>;
            fn save(&self, supplies: &[Supply]) -> Result<(), SnapshotError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn draft() -> DraftSupply {
        DraftSupply::new(DraftSupplyProps {
            name: "Vacuna triple".to_string(),
            quantity: 12.0,
            unit: UnitOfMeasure::Unit,
            price: 8500.0,
            entry_date: EntryDate::parse("2023-05-15").unwrap(),
            category: SupplyCategory::Medicine,
            stage: None,
        })
        .unwrap()
    }

    fn created(id: &str, draft: &DraftSupply) -> Supply {
        Supply::from_remote(
            SupplyId::new(id),
            draft.name.clone(),
            draft.quantity,
            draft.unit,
            draft.price,
            draft.entry_date,
            draft.category,
            draft.stage,
        )
    }

    #[tokio::test]
    async fn should_append_server_record_when_create_succeeds() {
        let cache = Arc::new(SupplyCache::new());

        let mut mock_repo = MockSupplyRepo::new();
        mock_repo
            .expect_create()
            .returning(|d| Ok(created("42", d)));
        let mut mock_snapshots = MockSnapshots::new();
        mock_snapshots.expect_save().times(1).returning(|_| Ok(()));

        let use_case = CreateSupplyUseCaseImpl {
            cache: cache.clone(),
            repository: Arc::new(mock_repo),
            snapshots: Arc::new(mock_snapshots),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateSupplyParams { draft: draft() })
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().id, SupplyId::new("42"));
        let supplies = cache.supplies();
        assert_eq!(supplies.len(), 1);
        assert_eq!(supplies[0].id, SupplyId::new("42"));
        assert!(!cache.is_loading());
    }

    #[tokio::test]
    async fn should_not_close_editor_when_create_succeeds() {
        let cache = Arc::new(SupplyCache::new());
        cache.open_editor();

        let mut mock_repo = MockSupplyRepo::new();
        mock_repo
            .expect_create()
            .returning(|d| Ok(created("42", d)));
        let mut mock_snapshots = MockSnapshots::new();
        mock_snapshots.expect_save().returning(|_| Ok(()));

        let use_case = CreateSupplyUseCaseImpl {
            cache: cache.clone(),
            repository: Arc::new(mock_repo),
            snapshots: Arc::new(mock_snapshots),
            logger: mock_logger(),
        };

        use_case
            .execute(CreateSupplyParams { draft: draft() })
            .await
            .unwrap();

        // closing is the caller's side effect, not the store's
        assert!(cache.is_editor_open());
    }

    #[tokio::test]
    async fn should_keep_records_and_set_error_when_create_fails() {
        let cache = Arc::new(SupplyCache::new());

        let mut mock_repo = MockSupplyRepo::new();
        mock_repo
            .expect_create()
            .returning(|_| Err(RemoteError::Rejected));
        let mut mock_snapshots = MockSnapshots::new();
        mock_snapshots.expect_save().never();

        let use_case = CreateSupplyUseCaseImpl {
            cache: cache.clone(),
            repository: Arc::new(mock_repo),
            snapshots: Arc::new(mock_snapshots),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateSupplyParams { draft: draft() })
            .await;

        assert!(result.is_err());
        assert!(cache.supplies().is_empty());
        assert!(!cache.is_loading());
        assert_eq!(cache.last_error(), Some("remote.rejected".to_string()));
    }

    #[tokio::test]
    async fn should_accept_stage_on_non_food_draft() {
        // the draft is stored as sent; only presentation voids the stage
        let cache = Arc::new(SupplyCache::new());

        let mut mock_repo = MockSupplyRepo::new();
        mock_repo
            .expect_create()
            .returning(|d| Ok(created("7", d)));
        let mut mock_snapshots = MockSnapshots::new();
        mock_snapshots.expect_save().returning(|_| Ok(()));

        let use_case = CreateSupplyUseCaseImpl {
            cache: cache.clone(),
            repository: Arc::new(mock_repo),
            snapshots: Arc::new(mock_snapshots),
            logger: mock_logger(),
        };

        let mut equipment_draft = draft();
        equipment_draft.category = SupplyCategory::Equipment;
        equipment_draft.stage = Some(GrowthStage::Levante);

        let result = use_case
            .execute(CreateSupplyParams {
                draft: equipment_draft,
            })
            .await;

        assert!(result.is_ok());
        let stored = &cache.supplies()[0];
        assert_eq!(stored.stage, Some(GrowthStage::Levante));
        assert_eq!(stored.applicable_stage(), None);
    }
}
