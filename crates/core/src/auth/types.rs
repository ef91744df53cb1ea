use serde::{Deserialize, Serialize};

pub const ROLE_ADMIN: &str = "ROLE_ADMIN";
pub const ROLE_USER: &str = "ROLE_USER";

/// Signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: String,
    pub roles: Vec<String>,
}

impl Identity {
    pub fn new(user_id: impl Into<String>, roles: Vec<String>) -> Self {
        Self {
            user_id: user_id.into(),
            roles,
        }
    }

    /// Build from a space separated `roles` claim.
    pub fn from_claim(user_id: &str, roles_claim: &str) -> Self {
        Self::new(user_id, roles_from_claim(roles_claim))
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(ROLE_ADMIN)
    }
}

/// Split a `roles` claim on whitespace. A blank claim means no roles.
pub fn roles_from_claim(claim: &str) -> Vec<String> {
    claim.split_whitespace().map(str::to_string).collect()
}
