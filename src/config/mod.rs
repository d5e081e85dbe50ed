pub mod bootstrap_settings;
pub mod cors_settings;
pub mod database;
pub mod env_provider;
pub mod errors;
pub mod logging;
pub mod security_settings;
pub mod settings;

pub use bootstrap_settings::BootstrapSettings;
pub use cors_settings::CorsSettings;
pub use database::{init_database, migrate_database};
pub use env_provider::{EnvironmentProvider, SystemEnvironment};
#[cfg(test)]
pub use env_provider::MockEnvironment;
pub use errors::ApplicationError;
pub use logging::init_logging;
pub use security_settings::SecuritySettings;
pub use settings::Settings;
