use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::auth::{AccessPolicy, UserDirectory};
use crate::config::{CorsSettings, Settings};
use crate::mappers::FooMapper;
use crate::services::FooService;
use crate::stores::{FooRepository, FooStore};

/// Centralized application data, built once in main and shared read-only
///
/// ```text
/// main.rs
///   ↓
/// AppData::init(db, settings)
///   ├─ foo_mapper (FooMapper)
///   ├─ foo_service (Arc<FooService>) ← FooStore(db) + foo_mapper
///   ├─ user_directory (Arc<UserDirectory>)
///   ├─ access_policy (Arc<AccessPolicy>)
///   └─ cors_settings (CorsSettings)
///   ↓ wrapped in Arc<AppData>
///   └─ app::build_app(app_data) → FooApi::new(app_data)
/// ```
pub struct AppData {
    pub foo_mapper: FooMapper,
    pub foo_service: Arc<FooService>,
    pub user_directory: Arc<UserDirectory>,
    pub access_policy: Arc<AccessPolicy>,
    pub cors_settings: CorsSettings,
}

impl AppData {
    /// Initialize all application data
    ///
    /// The database should be connected and migrated before calling this.
    /// The connection is owned by the store from here on.
    pub fn init(db: DatabaseConnection, settings: &Settings) -> Self {
        tracing::info!("Initializing AppData...");

        let foo_store: Arc<dyn FooRepository> = Arc::new(FooStore::new(db));
        let foo_mapper = FooMapper::new();
        let foo_service = Arc::new(FooService::new(foo_store, foo_mapper));

        tracing::debug!("Building user directory...");
        let user_directory = Arc::new(UserDirectory::from_settings(&settings.security));
        let access_policy = Arc::new(AccessPolicy::default_rules());

        tracing::info!("AppData initialization complete");

        Self {
            foo_mapper,
            foo_service,
            user_directory,
            access_policy,
            cors_settings: settings.cors.clone(),
        }
    }
}
