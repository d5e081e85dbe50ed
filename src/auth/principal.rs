/// An authenticated caller and the roles granted to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub username: String,
    pub roles: Vec<String>,
}

impl Principal {
    pub fn new(username: impl Into<String>, roles: Vec<String>) -> Self {
        Self {
            username: username.into(),
            roles,
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r.eq_ignore_ascii_case(role))
    }
}
