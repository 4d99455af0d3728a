use std::sync::Arc;

use logger::TracingLogger;
use persistence::session::store::FileSessionStore;
use persistence::storage::StorageLayout;
use persistence::supply::snapshot::JsonSnapshotStore;
use remote::client::ApiClient;
use remote::session::gateway::AuthGatewayHttp;
use remote::supply::gateway::SupplyRepositoryHttp;

use business::application::session::login::LoginUseCaseImpl;
use business::application::session::logout::LogoutUseCaseImpl;
use business::application::supply::create::CreateSupplyUseCaseImpl;
use business::application::supply::delete::DeleteSupplyUseCaseImpl;
use business::application::supply::fetch_all::FetchSuppliesUseCaseImpl;
use business::application::supply::get_by_id::GetSupplyByIdUseCaseImpl;
use business::application::supply::update::UpdateSupplyUseCaseImpl;

use business::domain::logger::Logger;
use business::domain::session::context::SessionContext;
use business::domain::session::gateway::AuthGateway;
use business::domain::session::store::SessionStore;
use business::domain::session::use_cases::login::LoginUseCase;
use business::domain::session::use_cases::logout::LogoutUseCase;
use business::domain::supply::cache::SupplyCache;
use business::domain::supply::repository::SupplyRepository;
use business::domain::supply::snapshot::SnapshotStore;
use business::domain::supply::use_cases::create::CreateSupplyUseCase;
use business::domain::supply::use_cases::delete::DeleteSupplyUseCase;
use business::domain::supply::use_cases::fetch_all::FetchSuppliesUseCase;
use business::domain::supply::use_cases::get_by_id::GetSupplyByIdUseCase;
use business::domain::supply::use_cases::update::UpdateSupplyUseCase;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub cache: Arc<SupplyCache>,
    pub session: Arc<SessionContext>,
    pub sessions: Arc<dyn SessionStore>,
    pub fetch_supplies: Arc<dyn FetchSuppliesUseCase>,
    pub get_supply: Arc<dyn GetSupplyByIdUseCase>,
    pub create_supply: Arc<dyn CreateSupplyUseCase>,
    pub update_supply: Arc<dyn UpdateSupplyUseCase>,
    pub delete_supply: Arc<dyn DeleteSupplyUseCase>,
    pub login: Arc<dyn LoginUseCase>,
    pub logout: Arc<dyn LogoutUseCase>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let session = Arc::new(SessionContext::new());
        let cache = Arc::new(SupplyCache::new());

        // Local storage
        let layout = StorageLayout::new(&config.storage.data_dir);
        layout
            .ensure()
            .map_err(|e| anyhow::anyhow!("storage init failed: {e}"))?;
        let snapshots: Arc<dyn SnapshotStore> = Arc::new(JsonSnapshotStore::new(&layout));
        let sessions: Arc<dyn SessionStore> = Arc::new(FileSessionStore::new(&layout));

        // Restore persisted state before anything hits the network
        match snapshots.load() {
            Ok(supplies) => cache.restore(supplies),
            Err(err) => logger.warn(&format!("Supply snapshot restore failed: {err}")),
        }
        match sessions.load() {
            Ok(Some(stored)) => session.establish(stored),
            Ok(None) => {}
            Err(err) => logger.warn(&format!("Session restore failed: {err}")),
        }

        // Remote adapters
        let supply_api = ApiClient::new(config.api.base_url.clone(), session.clone());
        let auth_api = ApiClient::new(config.api.base_url.clone(), session.clone());
        let repository: Arc<dyn SupplyRepository> = Arc::new(SupplyRepositoryHttp::new(supply_api));
        let gateway: Arc<dyn AuthGateway> = Arc::new(AuthGatewayHttp::new(auth_api));

        // Supply use cases
        let fetch_supplies = Arc::new(FetchSuppliesUseCaseImpl {
            cache: cache.clone(),
            repository: repository.clone(),
            snapshots: snapshots.clone(),
            logger: logger.clone(),
        });
        let get_supply = Arc::new(GetSupplyByIdUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let create_supply = Arc::new(CreateSupplyUseCaseImpl {
            cache: cache.clone(),
            repository: repository.clone(),
            snapshots: snapshots.clone(),
            logger: logger.clone(),
        });
        let update_supply = Arc::new(UpdateSupplyUseCaseImpl {
            cache: cache.clone(),
            repository: repository.clone(),
            snapshots: snapshots.clone(),
            logger: logger.clone(),
        });
        let delete_supply = Arc::new(DeleteSupplyUseCaseImpl {
            cache: cache.clone(),
            repository,
            snapshots,
            logger: logger.clone(),
        });

        // Session use cases
        let login = Arc::new(LoginUseCaseImpl {
            gateway,
            context: session.clone(),
            sessions: sessions.clone(),
            logger: logger.clone(),
        });
        let logout = Arc::new(LogoutUseCaseImpl {
            context: session.clone(),
            sessions: sessions.clone(),
            logger,
        });

        Ok(Self {
            cache,
            session,
            sessions,
            fetch_supplies,
            get_supply,
            create_supply,
            update_supply,
            delete_supply,
            login,
            logout,
        })
    }

    /// A 401 already invalidated the in-memory session; drop the
    /// persisted copy too so the next run starts logged out.
    pub fn discard_stale_session(&self) {
        let _ = self.sessions.clear();
    }
}
