use std::fmt;

use crate::config::EnvironmentProvider;
use crate::config::errors::ApplicationError;

const DEFAULT_USER_NAME: &str = "user";
const DEFAULT_USER_ROLES: &str = "USER";

/// Credentials of the single configured API user
///
/// When no password is configured one is generated at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct SecuritySettings {
    pub user_name: String,
    pub user_password: Option<String>,
    pub user_roles: Vec<String>,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            user_name: DEFAULT_USER_NAME.to_string(),
            user_password: None,
            user_roles: vec![DEFAULT_USER_ROLES.to_string()],
        }
    }
}

impl SecuritySettings {
    /// Load from `SECURITY_USER_NAME`, `SECURITY_USER_PASSWORD`, `SECURITY_USER_ROLES`
    pub fn from_env_provider(env: &dyn EnvironmentProvider) -> Result<Self, ApplicationError> {
        let user_name = env.get_or("SECURITY_USER_NAME", DEFAULT_USER_NAME);
        if user_name.contains(':') {
            return Err(ApplicationError::invalid("SECURITY_USER_NAME", "must not contain ':'"));
        }

        let user_password = env.get_var("SECURITY_USER_PASSWORD").filter(|p| !p.is_empty());

        let user_roles: Vec<String> = env
            .get_list("SECURITY_USER_ROLES", DEFAULT_USER_ROLES)
            .into_iter()
            .map(|r| r.to_uppercase())
            .collect();

        Ok(Self {
            user_name,
            user_password,
            user_roles,
        })
    }

    pub fn with_user(name: &str, password: &str, roles: &[&str]) -> Self {
        Self {
            user_name: name.to_string(),
            user_password: Some(password.to_string()),
            user_roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }
}

impl fmt::Debug for SecuritySettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecuritySettings")
            .field("user_name", &self.user_name)
            .field("user_password", &self.user_password.as_ref().map(|_| "[redacted]"))
            .field("user_roles", &self.user_roles)
            .finish()
    }
}
