use crate::config::errors::ApplicationError;
use crate::config::{BootstrapSettings, CorsSettings, EnvironmentProvider, SecuritySettings};

/// All settings, loaded once at startup
#[derive(Debug)]
pub struct Settings {
    pub bootstrap: BootstrapSettings,
    pub cors: CorsSettings,
    pub security: SecuritySettings,
}

impl Settings {
    pub fn from_env_provider(env: &dyn EnvironmentProvider) -> Result<Self, ApplicationError> {
        Ok(Self {
            bootstrap: BootstrapSettings::from_env_provider(env)?,
            cors: CorsSettings::from_env_provider(env)?,
            security: SecuritySettings::from_env_provider(env)?,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, ApplicationError> {
        Self::from_env_provider(&crate::config::SystemEnvironment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;

    #[test]
    fn test_loads_every_section() {
        let env = MockEnvironment::empty()
            .with_var("PORT", "9000")
            .with_var("CORS_MAX_AGE", "10")
            .with_var("SECURITY_USER_NAME", "ops");

        let settings = Settings::from_env_provider(&env).unwrap();

        assert_eq!(settings.bootstrap.server_port(), 9000);
        assert_eq!(settings.cors.max_age_secs, 10);
        assert_eq!(settings.security.user_name, "ops");
    }

    #[test]
    fn test_first_invalid_section_fails_the_load() {
        let env = MockEnvironment::empty().with_var("PORT", "not-a-port");
        let err = Settings::from_env_provider(&env).unwrap_err();

        assert!(err.to_string().contains("PORT"));
    }
}
