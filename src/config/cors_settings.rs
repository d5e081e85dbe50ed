use poem::middleware::Cors;

use crate::config::EnvironmentProvider;
use crate::config::env_provider::get_parsed;
use crate::config::env_provider::split_list;
use crate::config::errors::ApplicationError;

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://localhost:4200";
const DEFAULT_ALLOWED_METHODS: &str = "GET,POST,PUT,DELETE,OPTIONS,PATCH";
const DEFAULT_ALLOWED_HEADERS: &str = "Origin,Content-Type,Accept,Authorization,X-Requested-With";
const DEFAULT_EXPOSED_HEADERS: &str = "Content-Disposition";
const DEFAULT_MAX_AGE_SECS: i32 = 3600;

/// Cross-origin policy applied to everything under `/api`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsSettings {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub exposed_headers: Vec<String>,
    pub allow_credentials: bool,
    pub max_age_secs: i32,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origins: split_list(DEFAULT_ALLOWED_ORIGINS),
            allowed_methods: split_list(DEFAULT_ALLOWED_METHODS),
            allowed_headers: split_list(DEFAULT_ALLOWED_HEADERS),
            exposed_headers: split_list(DEFAULT_EXPOSED_HEADERS),
            allow_credentials: true,
            max_age_secs: DEFAULT_MAX_AGE_SECS,
        }
    }
}

impl CorsSettings {
    /// Load from the `CORS_*` variables, defaulting each one independently
    pub fn from_env_provider(env: &dyn EnvironmentProvider) -> Result<Self, ApplicationError> {
        let max_age_secs = get_parsed(env, "CORS_MAX_AGE", DEFAULT_MAX_AGE_SECS)?;
        if max_age_secs < 0 {
            return Err(ApplicationError::invalid("CORS_MAX_AGE", "must not be negative"));
        }

        let settings = Self {
            allowed_origins: env.get_list("CORS_ALLOWED_ORIGINS", DEFAULT_ALLOWED_ORIGINS),
            allowed_methods: env.get_list("CORS_ALLOWED_METHODS", DEFAULT_ALLOWED_METHODS),
            allowed_headers: env.get_list("CORS_ALLOWED_HEADERS", DEFAULT_ALLOWED_HEADERS),
            exposed_headers: env.get_list("CORS_EXPOSED_HEADERS", DEFAULT_EXPOSED_HEADERS),
            allow_credentials: get_parsed(env, "CORS_ALLOW_CREDENTIALS", true)?,
            max_age_secs,
        };

        // Browsers refuse credentialed responses with a wildcard origin
        if settings.allow_credentials && settings.allowed_origins.iter().any(|o| o == "*") {
            return Err(ApplicationError::invalid(
                "CORS_ALLOWED_ORIGINS",
                "\"*\" cannot be combined with CORS_ALLOW_CREDENTIALS=true",
            ));
        }

        Ok(settings)
    }

    /// Build the poem CORS middleware for these settings
    pub fn to_middleware(&self) -> Cors {
        let mut cors = Cors::new()
            .allow_credentials(self.allow_credentials)
            .max_age(self.max_age_secs);

        if !self.allowed_origins.iter().any(|o| o == "*") {
            cors = cors.allow_origins(self.allowed_origins.iter().map(String::as_str));
        }

        cors.allow_methods(self.allowed_methods.iter().map(String::as_str))
            .allow_headers(self.allowed_headers.iter().map(String::as_str))
            .expose_headers(self.exposed_headers.iter().map(String::as_str))
    }
}
