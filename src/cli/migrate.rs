use crate::config::{BootstrapSettings, init_database, migrate_database};
use crate::errors::InternalError;

/// Connect to the configured database and run all pending migrations
pub async fn run_migrations(bootstrap_settings: &BootstrapSettings) -> Result<(), InternalError> {
    tracing::info!("Running database migrations...");

    let db = init_database(bootstrap_settings).await?;
    migrate_database(&db).await?;

    tracing::info!("All migrations completed successfully");

    Ok(())
}
