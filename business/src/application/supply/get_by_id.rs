use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RemoteError;
use crate::domain::logger::Logger;
use crate::domain::supply::errors::SupplyError;
use crate::domain::supply::model::Supply;
use crate::domain::supply::repository::SupplyRepository;
use crate::domain::supply::use_cases::get_by_id::{GetSupplyByIdParams, GetSupplyByIdUseCase};

/// Direct remote read; does not touch the cache.
pub struct GetSupplyByIdUseCaseImpl {
    pub repository: Arc<dyn SupplyRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetSupplyByIdUseCase for GetSupplyByIdUseCaseImpl {
    async fn execute(&self, params: GetSupplyByIdParams) -> Result<Supply, SupplyError> {
        self.logger.info(&format!("Fetching supply: {}", params.id));

        let supply = self
            .repository
            .get_by_id(&params.id)
            .await
            .map_err(|e| match e {
                RemoteError::NotFound => SupplyError::NotFound,
                other => SupplyError::Remote(other),
            })?;

        Ok(supply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::{EntryDate, SupplyId};
    use crate::domain::supply::model::DraftSupply;
    use crate::domain::supply::value_objects::{SupplyCategory, UnitOfMeasure};
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

    #[tokio::test]
    async fn should_return_supply_when_remote_has_it() {
        let mut mock_repo = MockSupplyRepo::new();
        mock_repo.expect_get_by_id().returning(|id| {
            Ok(Supply::from_remote(
                id.clone(),
                "Cal viva".to_string(),
                25.0,
                UnitOfMeasure::Kilograms,
                12000.0,
                EntryDate::parse("2023-05-15").unwrap(),
                SupplyCategory::Disinfectant,
                None,
            ))
        });

        let use_case = GetSupplyByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetSupplyByIdParams {
                id: SupplyId::new("5"),
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().name, "Cal viva");
    }

    #[tokio::test]
    async fn should_map_missing_record_to_not_found() {
        let mut mock_repo = MockSupplyRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RemoteError::NotFound));

        let use_case = GetSupplyByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetSupplyByIdParams {
                id: SupplyId::new("404"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), SupplyError::NotFound));
    }
}
