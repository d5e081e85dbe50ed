use std::collections::HashMap;

use hmac::digest::Key;
use hmac::{Hmac, Mac};
use rand::Rng;
use sha2::Sha256;

use crate::auth::Principal;
use crate::config::SecuritySettings;

type HmacSha256 = Hmac<Sha256>;

const GENERATED_PASSWORD_LENGTH: usize = 20;

struct UserEntry {
    password_digest: Vec<u8>,
    roles: Vec<String>,
}

/// In-memory credential directory for HTTP Basic authentication
///
/// Passwords are never stored; each is kept as an HMAC-SHA256 digest under a
/// key generated when the directory is created and compared in constant time.
/// The key is a full SHA-256 block, so keying the MAC cannot fail.
pub struct UserDirectory {
    key: Key<HmacSha256>,
    users: HashMap<String, UserEntry>,
}

impl UserDirectory {
    pub fn new() -> Self {
        let mut key = Key::<HmacSha256>::default();
        rand::rng().fill(key.as_mut_slice());
        Self {
            key,
            users: HashMap::new(),
        }
    }

    /// Build the directory from settings, generating a password if none is set
    ///
    /// A generated password is logged once at warn level so it can be used.
    pub fn from_settings(settings: &SecuritySettings) -> Self {
        let mut directory = Self::new();

        let password = match &settings.user_password {
            Some(password) => password.clone(),
            None => {
                let generated = generate_password();
                tracing::warn!(
                    "No SECURITY_USER_PASSWORD configured. Using generated password for user '{}': {}",
                    settings.user_name,
                    generated
                );
                generated
            }
        };

        directory.add_user(&settings.user_name, &password, settings.user_roles.clone());
        directory
    }

    /// Register (or replace) a user
    pub fn add_user(&mut self, username: &str, password: &str, roles: Vec<String>) {
        let password_digest = self.digest(password).finalize().into_bytes().to_vec();
        self.users.insert(
            username.to_string(),
            UserEntry {
                password_digest,
                roles,
            },
        );
    }

    /// Verify credentials, returning the principal on success
    pub fn authenticate(&self, username: &str, password: &str) -> Option<Principal> {
        let entry = self.users.get(username)?;
        self.digest(password)
            .verify_slice(&entry.password_digest)
            .ok()
            .map(|_| Principal::new(username, entry.roles.clone()))
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    fn digest(&self, password: &str) -> HmacSha256 {
        let mut mac = <HmacSha256 as Mac>::new(&self.key);
        mac.update(password.as_bytes());
        mac
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

/// Random alphanumeric password for the default user
fn generate_password() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::rng();

    (0..GENERATED_PASSWORD_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory_with(username: &str, password: &str, roles: &[&str]) -> UserDirectory {
        let mut directory = UserDirectory::new();
        directory.add_user(username, password, roles.iter().map(|r| r.to_string()).collect());
        directory
    }

    #[test]
    fn test_authenticate_with_valid_credentials() {
        let directory = directory_with("testuser", "testpass", &["USER"]);

        let principal = directory.authenticate("testuser", "testpass").unwrap();

        assert_eq!(principal.username, "testuser");
        assert!(principal.has_role("USER"));
        assert!(!principal.has_role("ADMIN"));
    }

    #[test]
    fn test_wrong_password_is_rejected() {
        let directory = directory_with("testuser", "testpass", &["USER"]);
        assert!(directory.authenticate("testuser", "testpas").is_none());
        assert!(directory.authenticate("testuser", "").is_none());
    }

    #[test]
    fn test_unknown_user_is_rejected() {
        let directory = directory_with("testuser", "testpass", &["USER"]);
        assert!(directory.authenticate("someone", "testpass").is_none());
    }

    #[test]
    fn test_digests_differ_between_directories() {
        let a = directory_with("u", "same-password", &[]);
        let b = directory_with("u", "same-password", &[]);

        assert_ne!(a.users["u"].password_digest, b.users["u"].password_digest);
    }

    #[test]
    fn test_key_spans_a_full_hash_block() {
        let directory = UserDirectory::new();

        assert_eq!(directory.key.len(), 64);
        assert!(directory.key.iter().any(|b| *b != 0));
    }

    #[test]
    fn test_re_adding_a_user_replaces_the_password() {
        let mut directory = directory_with("testuser", "old", &["USER"]);
        directory.add_user("testuser", "new", vec!["USER".to_string()]);

        assert_eq!(directory.len(), 1);
        assert!(directory.authenticate("testuser", "old").is_none());
        assert!(directory.authenticate("testuser", "new").is_some());
    }

    #[test]
    fn test_from_settings_uses_configured_password() {
        let settings = SecuritySettings::with_user("admin", "adminpass", &["ADMIN"]);

        let directory = UserDirectory::from_settings(&settings);

        assert_eq!(directory.len(), 1);
        let principal = directory.authenticate("admin", "adminpass").unwrap();
        assert!(principal.has_role("ADMIN"));
    }

    #[test]
    fn test_from_settings_generates_password_when_missing() {
        let directory = UserDirectory::from_settings(&SecuritySettings::default());

        assert_eq!(directory.len(), 1);
        assert!(directory.authenticate("user", "").is_none());
    }

    #[test]
    fn test_generated_password_shape() {
        let password = generate_password();

        assert_eq!(password.len(), GENERATED_PASSWORD_LENGTH);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
