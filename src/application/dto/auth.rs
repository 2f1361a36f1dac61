use crate::domain::user::{Role, User, UserId};
use std::collections::HashSet;

/// A freshly issued bearer token and its lifetime in seconds.
#[derive(Debug, Clone)]
pub struct AuthTokenDto {
    pub token: String,
    pub expires_in: i64,
}

/// The principal behind a verified bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub email: String,
    pub roles: HashSet<Role>,
}

impl AuthenticatedUser {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.iter().any(|role| self.has_role(*role))
    }
}

#[derive(Debug, Clone)]
pub struct TokenSubject {
    pub user_id: UserId,
    pub email: String,
    pub roles: Vec<Role>,
}

impl From<&User> for TokenSubject {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.to_string(),
            roles: user.sorted_roles(),
        }
    }
}
