// Common test utilities for integration tests

use std::sync::Arc;

use fooapi::app::build_app;
use fooapi::app_data::AppData;
use fooapi::auth::UserDirectory;
use fooapi::config::{BootstrapSettings, CorsSettings, SecuritySettings, Settings};
use migration::{Migrator, MigratorTrait};
use poem::endpoint::BoxEndpoint;
use poem::test::TestClient;
use poem::Response;
use sea_orm::{Database, DatabaseConnection};

pub const TEST_USER: &str = "testuser";
pub const TEST_PASSWORD: &str = "testpass";

/// `testuser:testpass`
pub const USER_AUTH: &str = "Basic dGVzdHVzZXI6dGVzdHBhc3M=";
/// `testuser:wrong`
pub const WRONG_PASSWORD_AUTH: &str = "Basic dGVzdHVzZXI6d3Jvbmc=";
/// `viewer:viewpass`, a user holding only the AUDITOR role
pub const VIEWER_AUTH: &str = "Basic dmlld2VyOnZpZXdwYXNz";

/// Creates an in-memory database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

pub fn test_settings() -> Settings {
    Settings {
        bootstrap: BootstrapSettings::new("sqlite::memory:", "127.0.0.1", 0),
        cors: CorsSettings::default(),
        security: SecuritySettings::with_user(TEST_USER, TEST_PASSWORD, &["USER"]),
    }
}

/// Builds the full application over a fresh database
///
/// Besides the configured test user, the directory holds `viewer`, who
/// authenticates but lacks the roles the Foo endpoints require.
pub async fn setup_test_client() -> TestClient<BoxEndpoint<'static, Response>> {
    let db = setup_test_db().await;
    let mut app_data = AppData::init(db, &test_settings());

    let mut directory = UserDirectory::new();
    directory.add_user(TEST_USER, TEST_PASSWORD, vec!["USER".to_string()]);
    directory.add_user("viewer", "viewpass", vec!["AUDITOR".to_string()]);
    app_data.user_directory = Arc::new(directory);

    TestClient::new(build_app(Arc::new(app_data), "http://localhost/api"))
}
