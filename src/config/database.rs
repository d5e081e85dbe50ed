use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::config::BootstrapSettings;
use crate::errors::InternalError;
use crate::errors::internal::DatabaseError;

/// Connect to the configured database
///
/// Does NOT run migrations - call `migrate_database()` separately.
pub async fn init_database(bootstrap_settings: &BootstrapSettings) -> Result<DatabaseConnection, InternalError> {
    let database_url = bootstrap_settings.database_url();

    let db = Database::connect(database_url)
        .await
        .map_err(|e| InternalError::database("connect_database", e))?;

    tracing::debug!("Connected to database: {}", bootstrap_settings.redacted_database_url());

    Ok(db)
}

/// Run all pending migrations on the provided connection
pub async fn migrate_database(db: &DatabaseConnection) -> Result<(), InternalError> {
    Migrator::up(db, None)
        .await
        .map_err(|source| DatabaseError::Migration { source })?;

    tracing::debug!("Database migrations completed");

    Ok(())
}
