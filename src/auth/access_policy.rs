use crate::auth::Principal;

pub const ROLE_USER: &str = "USER";
pub const ROLE_ADMIN: &str = "ADMIN";

static DEFAULT_REQUIREMENT: Requirement = Requirement::Authenticated;

/// What a request path demands of the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// Open to anonymous callers
    Permit,
    /// Any authenticated principal
    Authenticated,
    /// Authenticated principal holding at least one of these roles
    AnyRole(Vec<String>),
}

/// Outcome of checking a caller against a requirement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    /// No or invalid credentials (401)
    Unauthenticated,
    /// Authenticated but missing a required role (403)
    Forbidden,
}

#[derive(Debug, Clone)]
struct Rule {
    prefix: String,
    requirement: Requirement,
}

/// Ordered path-prefix rules; the first matching prefix wins
///
/// Paths that match no rule require authentication.
#[derive(Debug, Clone, Default)]
pub struct AccessPolicy {
    rules: Vec<Rule>,
}

impl AccessPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn permit(self, prefix: &str) -> Self {
        self.rule(prefix, Requirement::Permit)
    }

    pub fn authenticated(self, prefix: &str) -> Self {
        self.rule(prefix, Requirement::Authenticated)
    }

    pub fn any_role(self, prefix: &str, roles: &[&str]) -> Self {
        self.rule(
            prefix,
            Requirement::AnyRole(roles.iter().map(|r| r.to_string()).collect()),
        )
    }

    fn rule(mut self, prefix: &str, requirement: Requirement) -> Self {
        self.rules.push(Rule {
            prefix: prefix.to_string(),
            requirement,
        });
        self
    }

    /// Public docs, auth and health endpoints are open; foos need USER or ADMIN
    pub fn default_rules() -> Self {
        Self::new()
            .permit("/api/v1/auth/")
            .permit("/swagger-ui")
            .permit("/api-docs")
            .permit("/actuator/")
            .permit("/api/health")
            .any_role("/api/v1/foos", &[ROLE_USER, ROLE_ADMIN])
    }

    pub fn requirement_for(&self, path: &str) -> &Requirement {
        self.rules
            .iter()
            .find(|rule| matches_prefix(path, &rule.prefix))
            .map(|rule| &rule.requirement)
            .unwrap_or(&DEFAULT_REQUIREMENT)
    }

    pub fn decide(&self, path: &str, principal: Option<&Principal>) -> Decision {
        match (self.requirement_for(path), principal) {
            (Requirement::Permit, _) => Decision::Allow,
            (_, None) => Decision::Unauthenticated,
            (Requirement::Authenticated, Some(_)) => Decision::Allow,
            (Requirement::AnyRole(roles), Some(principal)) => {
                if roles.iter().any(|r| principal.has_role(r)) {
                    Decision::Allow
                } else {
                    Decision::Forbidden
                }
            }
        }
    }
}

/// `/api/v1/foos` matches itself and `/api/v1/foos/...` but not `/api/v1/foosball`
fn matches_prefix(path: &str, prefix: &str) -> bool {
    if prefix.ends_with('/') {
        return path.starts_with(prefix) || path == prefix.trim_end_matches('/');
    }
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(roles: &[&str]) -> Principal {
        Principal::new("someone", roles.iter().map(|r| r.to_string()).collect())
    }

    #[test]
    fn test_public_paths_are_permitted_anonymously() {
        let policy = AccessPolicy::default_rules();

        for path in ["/api/health", "/swagger-ui", "/swagger-ui/index.html", "/api-docs", "/api/v1/auth/login", "/actuator/health"] {
            assert_eq!(policy.decide(path, None), Decision::Allow, "{}", path);
        }
    }

    #[test]
    fn test_foos_require_user_or_admin() {
        let policy = AccessPolicy::default_rules();

        assert_eq!(policy.decide("/api/v1/foos", None), Decision::Unauthenticated);
        assert_eq!(policy.decide("/api/v1/foos/1", Some(&user(&["USER"]))), Decision::Allow);
        assert_eq!(policy.decide("/api/v1/foos/1", Some(&user(&["ADMIN"]))), Decision::Allow);
        assert_eq!(policy.decide("/api/v1/foos/1", Some(&user(&["AUDITOR"]))), Decision::Forbidden);
        assert_eq!(policy.decide("/api/v1/foos", Some(&user(&[]))), Decision::Forbidden);
    }

    #[test]
    fn test_unmatched_paths_require_authentication_only() {
        let policy = AccessPolicy::default_rules();

        assert_eq!(policy.decide("/api/v2/other", None), Decision::Unauthenticated);
        assert_eq!(policy.decide("/api/v2/other", Some(&user(&[]))), Decision::Allow);
    }

    #[test]
    fn test_prefix_matches_segment_boundaries() {
        assert!(matches_prefix("/api/v1/foos", "/api/v1/foos"));
        assert!(matches_prefix("/api/v1/foos/9", "/api/v1/foos"));
        assert!(!matches_prefix("/api/v1/foosball", "/api/v1/foos"));
        assert!(matches_prefix("/api/v1/auth/login", "/api/v1/auth/"));
        assert!(matches_prefix("/api/v1/auth", "/api/v1/auth/"));
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let policy = AccessPolicy::new()
            .permit("/open/public")
            .any_role("/open", &["ADMIN"]);

        assert_eq!(policy.decide("/open/public/x", None), Decision::Allow);
        assert_eq!(policy.decide("/open/private", Some(&user(&["USER"]))), Decision::Forbidden);
    }

    #[test]
    fn test_role_match_is_case_insensitive() {
        assert!(user(&["user"]).has_role("USER"));
    }
}
