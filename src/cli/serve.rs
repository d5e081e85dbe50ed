use std::sync::Arc;

use poem::Server;
use poem::listener::TcpListener;

use crate::app::build_app;
use crate::app_data::AppData;
use crate::config::{Settings, init_database, migrate_database};

/// Connect, migrate, compose and serve until the process is stopped
pub async fn serve(settings: Settings) -> Result<(), Box<dyn std::error::Error>> {
    let db = init_database(&settings.bootstrap).await?;
    tracing::info!("Connected to database");

    migrate_database(&db).await?;
    tracing::info!("Database migrations completed");

    let app_data = Arc::new(AppData::init(db, &settings));

    let server_url = format!("http://localhost:{}/api", settings.bootstrap.server_port());
    let app = build_app(app_data, &server_url);

    let address = settings.bootstrap.server_address();
    tracing::info!("Starting server on http://{}", address);
    tracing::info!("Swagger UI available at http://localhost:{}/swagger-ui", settings.bootstrap.server_port());

    Server::new(TcpListener::bind(address)).run(app).await?;

    Ok(())
}
