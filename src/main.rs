use clap::Parser;

use fooapi::cli::{Cli, Commands, migrate, serve};
use fooapi::config::{Settings, init_logging};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    init_logging()?;

    let settings = Settings::from_env()?;
    tracing::debug!("Loaded settings: {:?}", settings);

    match cli.command_or_default() {
        Commands::Migrate => migrate::run_migrations(&settings.bootstrap).await?,
        Commands::Serve => serve::serve(settings).await?,
    }

    Ok(())
}
