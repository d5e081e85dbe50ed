use std::str::FromStr;

use crate::config::errors::ApplicationError;

/// Trait for providing environment variable access
///
/// This abstraction allows settings to be loaded in tests without touching
/// the process environment, which is shared across parallel tests.
pub trait EnvironmentProvider {
    fn get_var(&self, key: &str) -> Option<String>;

    /// Value of `key`, or `default` when unset or empty
    fn get_or(&self, key: &str, default: &str) -> String {
        self.get_var(key)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| default.to_string())
    }

    /// Comma-separated list; entries are trimmed and empty entries dropped
    fn get_list(&self, key: &str, default: &str) -> Vec<String> {
        split_list(&self.get_or(key, default))
    }
}

/// Parse `key` into `T`, falling back to `default` when unset or empty
pub fn get_parsed<T>(env: &dyn EnvironmentProvider, key: &str, default: T) -> Result<T, ApplicationError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env.get_var(key).filter(|v| !v.trim().is_empty()) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ApplicationError::ParseError {
            setting_name: key.to_string(),
            error: e.to_string(),
        }),
        None => Ok(default),
    }
}

pub(crate) fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Production environment provider that reads from system environment
pub struct SystemEnvironment;

impl EnvironmentProvider for SystemEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Test environment provider with configurable variables
#[cfg(test)]
pub struct MockEnvironment {
    vars: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl MockEnvironment {
    pub fn new(vars: std::collections::HashMap<String, String>) -> Self {
        Self { vars }
    }

    pub fn empty() -> Self {
        Self {
            vars: std::collections::HashMap::new(),
        }
    }

    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }
}

#[cfg(test)]
impl EnvironmentProvider for MockEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
