//! Server host holding the store state shared by every route
//!
//! The host owns one store per resource, wired over a single storage
//! backend. Stores that resolve references (purchase requests, demands)
//! share the same user and medicine stores the REST routes expose.

use crate::config::{StorageBackend, StorageConfig};
use crate::core::DataService;
use crate::core::error::RegistryError;
use crate::entities::demand::{Demand, DemandDescriptor, DemandStore};
use crate::entities::medicine::{Medicine, MedicineDescriptor, MedicineStore};
use crate::entities::purchase_request::{
    PurchaseRequest, PurchaseRequestDescriptor, PurchaseRequestStore,
};
use crate::entities::user::{User, UserDescriptor, UserStore};
use crate::server::entity_registry::EntityRegistry;
use crate::storage::InMemoryDataService;
use anyhow::Result;
use std::sync::Arc;

/// One store per resource
#[derive(Clone)]
pub struct Stores {
    pub medicines: MedicineStore,
    pub users: UserStore,
    pub purchase_requests: PurchaseRequestStore,
    pub demands: DemandStore,
}

impl Stores {
    /// Wire stores over the given data services
    pub fn new(
        medicines: Arc<dyn DataService<Medicine>>,
        users: Arc<dyn DataService<User>>,
        purchase_requests: Arc<dyn DataService<PurchaseRequest>>,
        demands: Arc<dyn DataService<Demand>>,
    ) -> Self {
        let medicines = MedicineStore::new(medicines);
        let users = UserStore::new(users);

        Self {
            purchase_requests: PurchaseRequestStore::new(
                purchase_requests,
                users.clone(),
                medicines.clone(),
            ),
            demands: DemandStore::new(demands, users.clone(), medicines.clone()),
            medicines,
            users,
        }
    }

    /// Stores backed by in-process tables
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryDataService::<Medicine>::new()),
            Arc::new(InMemoryDataService::<User>::new()),
            Arc::new(InMemoryDataService::<PurchaseRequest>::new()),
            Arc::new(InMemoryDataService::<Demand>::new()),
        )
    }

    /// Stores backed by PostgreSQL tables sharing one pool
    #[cfg(feature = "postgres")]
    pub fn postgres(pool: sqlx::PgPool) -> Self {
        use crate::storage::PostgresDataService;

        Self::new(
            Arc::new(PostgresDataService::<Medicine>::new(pool.clone())),
            Arc::new(PostgresDataService::<User>::new(pool.clone())),
            Arc::new(PostgresDataService::<PurchaseRequest>::new(pool.clone())),
            Arc::new(PostgresDataService::<Demand>::new(pool)),
        )
    }

    /// Build the stores for the configured backend
    ///
    /// For PostgreSQL this connects and applies the schema.
    pub async fn from_config(config: &StorageConfig) -> Result<Self> {
        match config.backend {
            StorageBackend::Memory => {
                tracing::info!("using in-memory storage");
                Ok(Self::in_memory())
            }
            #[cfg(feature = "postgres")]
            StorageBackend::Postgres => {
                use crate::storage::postgres::{connect, ensure_schema};

                let url = config
                    .database_url
                    .as_deref()
                    .ok_or_else(|| anyhow::anyhow!("storage.database_url is required"))?;
                let pool = connect(url, config.max_connections).await?;
                ensure_schema(&pool).await?;
                tracing::info!(
                    max_connections = config.max_connections,
                    "using PostgreSQL storage"
                );
                Ok(Self::postgres(pool))
            }
            #[cfg(not(feature = "postgres"))]
            StorageBackend::Postgres => Err(anyhow::anyhow!(
                "PostgreSQL storage requires the 'postgres' feature"
            )),
        }
    }

    /// Route table over these stores
    pub fn registry(&self) -> Result<EntityRegistry, RegistryError> {
        let mut registry = EntityRegistry::new();
        registry.register(MedicineDescriptor::new(self.medicines.clone()))?;
        registry.register(PurchaseRequestDescriptor::new(
            self.purchase_requests.clone(),
        ))?;
        registry.register(DemandDescriptor::new(self.demands.clone()))?;
        registry.register(UserDescriptor::new(self.users.clone()))?;
        Ok(registry)
    }
}

impl Default for Stores {
    fn default() -> Self {
        Self::in_memory()
    }
}
