use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::supply::cache::SupplyCache;
use crate::domain::supply::errors::SupplyError;
use crate::domain::supply::model::Supply;
use crate::domain::supply::repository::SupplyRepository;
use crate::domain::supply::snapshot::SnapshotStore;
use crate::domain::supply::use_cases::fetch_all::FetchSuppliesUseCase;

pub struct FetchSuppliesUseCaseImpl {
    pub cache: Arc<SupplyCache>,
    pub repository: Arc<dyn SupplyRepository>,
    pub snapshots: Arc<dyn SnapshotStore>,
    pub logger: Arc<dyn Logger>,
}

impl FetchSuppliesUseCaseImpl {
    fn mirror(&self) {
        if let Err(err) = self.snapshots.save(&self.cache.supplies()) {
            self.logger
                .warn(&format!("Supply snapshot write failed: {err}"));
        }
    }
}

#[async_trait]
impl FetchSuppliesUseCase for FetchSuppliesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Supply>, SupplyError> {
        self.logger.info("Fetching supplies");
        self.cache.begin_operation();

        match self.repository.get_all().await {
            Ok(supplies) => {
                self.cache.complete_fetch(supplies.clone());
                self.mirror();
                self.logger
                    .info(&format!("Fetched {} supplies", supplies.len()));
                Ok(supplies)
            }
            Err(err) => {
                self.cache.fail_operation(&err.to_string());
                self.logger.error(&format!("Fetching supplies failed: {err}"));
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
    use crate::domain::supply::model::DraftSupply;
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

    fn feed_supply() -> Supply {
        Supply::from_remote(
            SupplyId::new("1"),
            "Feed".to_string(),
            50.0,
            UnitOfMeasure::Kilograms,
            20000.0,
            EntryDate::parse("2023-05-15").unwrap(),
            SupplyCategory::Food,
            Some(GrowthStage::Cria),
        )
    }

    #[tokio::test]
    async fn should_replace_records_with_remote_list_when_fetch_succeeds() {
        let cache = Arc::new(SupplyCache::new());
        cache.restore(vec![Supply::from_remote(
            SupplyId::new("9"),
            "Stale".to_string(),
            1.0,
            UnitOfMeasure::Unit,
            100.0,
            EntryDate::parse("2023-01-01").unwrap(),
            SupplyCategory::Other,
            None,
        )]);

        let mut mock_repo = MockSupplyRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Ok(vec![feed_supply()]));
        let mut mock_snapshots = MockSnapshots::new();
        mock_snapshots.expect_save().times(1).returning(|_| Ok(()));

        let use_case = FetchSuppliesUseCaseImpl {
            cache: cache.clone(),
            repository: Arc::new(mock_repo),
            snapshots: Arc::new(mock_snapshots),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(result.is_ok());
        let supplies = cache.supplies();
        assert_eq!(supplies.len(), 1);
        assert_eq!(supplies[0].id, SupplyId::new("1"));
        assert!(!cache.is_loading());
        assert_eq!(cache.last_error(), None);
    }

    #[tokio::test]
    async fn should_keep_records_and_set_error_when_fetch_fails() {
        let cache = Arc::new(SupplyCache::new());
        cache.restore(vec![feed_supply()]);

        let mut mock_repo = MockSupplyRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Err(RemoteError::Unreachable));
        let mut mock_snapshots = MockSnapshots::new();
        mock_snapshots.expect_save().never();

        let use_case = FetchSuppliesUseCaseImpl {
            cache: cache.clone(),
            repository: Arc::new(mock_repo),
            snapshots: Arc::new(mock_snapshots),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(result.is_err());
        assert_eq!(cache.supplies().len(), 1);
        assert!(!cache.is_loading());
        assert_eq!(cache.last_error(), Some("remote.unreachable".to_string()));
    }

    #[tokio::test]
    async fn should_not_fail_fetch_when_snapshot_write_fails() {
        let cache = Arc::new(SupplyCache::new());

        let mut mock_repo = MockSupplyRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Ok(vec![feed_supply()]));
        let mut mock_snapshots = MockSnapshots::new();
        mock_snapshots
            .expect_save()
            .returning(|_| Err(SnapshotError::Io));

        let use_case = FetchSuppliesUseCaseImpl {
            cache: cache.clone(),
            repository: Arc::new(mock_repo),
            snapshots: Arc::new(mock_snapshots),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(result.is_ok());
        assert_eq!(cache.supplies().len(), 1);
    }

    #[tokio::test]
    async fn should_be_idempotent_across_repeated_fetches() {
        let cache = Arc::new(SupplyCache::new());

        let mut mock_repo = MockSupplyRepo::new();
        mock_repo
            .expect_get_all()
            .times(2)
            .returning(|| Ok(vec![feed_supply()]));
        let mut mock_snapshots = MockSnapshots::new();
        mock_snapshots.expect_save().returning(|_| Ok(()));

        let use_case = FetchSuppliesUseCaseImpl {
            cache: cache.clone(),
            repository: Arc::new(mock_repo),
            snapshots: Arc::new(mock_snapshots),
            logger: mock_logger(),
        };

        use_case.execute().await.unwrap();
        use_case.execute().await.unwrap();

        assert_eq!(cache.supplies().len(), 1);
    }
}
