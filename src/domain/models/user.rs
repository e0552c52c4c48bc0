use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Planner,
}

/// The authenticated session identity. Planner sessions are scoped to a
/// single `planner_id` and see only their own events and holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planner_id: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// The planner id this user is scoped to, if any. Admins are unscoped.
    pub fn planner_scope(&self) -> Option<&str> {
        match self.role {
            Role::Admin => None,
            Role::Planner => self.planner_id.as_deref(),
        }
    }
}
