use std::path::PathBuf;

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{EnvironmentProvider, SystemEnvironment};

/// Configuration for application logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub log_level: String,
    pub app_log_file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Read `LOG_LEVEL` (default `INFO`) and `APP_LOG_FILE`
    pub fn from_env_provider(env: &dyn EnvironmentProvider) -> Self {
        Self {
            log_level: env.get_or("LOG_LEVEL", "INFO"),
            app_log_file: env.get_var("APP_LOG_FILE").filter(|p| !p.is_empty()).map(PathBuf::from),
        }
    }

    pub fn from_env() -> Self {
        Self::from_env_provider(&SystemEnvironment)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize logging: {0}")]
    InitializationError(String),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("File system error: {0}")]
    FileSystemError(#[from] std::io::Error),
}

/// Initialize the tracing subscriber with console and optional file output
pub fn init_logging() -> Result<(), LoggingError> {
    init_logging_with(&LoggingConfig::from_env())
}

pub fn init_logging_with(config: &LoggingConfig) -> Result<(), LoggingError> {
    let make_filter = || {
        EnvFilter::try_new(&config.log_level)
            .map_err(|e| LoggingError::InvalidLogLevel(format!("{}: {}", config.log_level, e)))
    };

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(make_filter()?);

    let subscriber = tracing_subscriber::registry().with(console_layer);

    if let Some(log_file_path) = &config.app_log_file {
        let directory = log_file_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| std::path::Path::new("."));
        std::fs::create_dir_all(directory)?;

        let file_name = log_file_path
            .file_name()
            .ok_or_else(|| LoggingError::InitializationError("Invalid log file path".to_string()))?;

        // Rotated daily
        let file_appender = tracing_appender::rolling::daily(directory, file_name);

        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_target(true)
            .with_ansi(false)
            .with_file(true)
            .with_line_number(true)
            .with_filter(make_filter()?);

        subscriber
            .with(file_layer)
            .try_init()
            .map_err(|e| LoggingError::InitializationError(e.to_string()))?;
    } else {
        subscriber
            .try_init()
            .map_err(|e| LoggingError::InitializationError(e.to_string()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;

    #[test]
    fn test_config_defaults() {
        let config = LoggingConfig::from_env_provider(&MockEnvironment::empty());

        assert_eq!(config.log_level, "INFO");
        assert_eq!(config.app_log_file, None);
    }

    #[test]
    fn test_config_from_env() {
        let env = MockEnvironment::empty()
            .with_var("LOG_LEVEL", "fooapi=debug,sea_orm=warn")
            .with_var("APP_LOG_FILE", "logs/fooapi.log");

        let config = LoggingConfig::from_env_provider(&env);

        assert_eq!(config.log_level, "fooapi=debug,sea_orm=warn");
        assert_eq!(config.app_log_file, Some(PathBuf::from("logs/fooapi.log")));
    }

    #[test]
    fn test_invalid_log_level_is_rejected() {
        let config = LoggingConfig {
            log_level: "fooapi=notalevel".to_string(),
            app_log_file: None,
        };

        assert!(matches!(init_logging_with(&config), Err(LoggingError::InvalidLogLevel(_))));
    }
}
