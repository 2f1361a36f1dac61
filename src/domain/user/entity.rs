// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Email, PasswordHash, Role, UserId};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub roles: HashSet<Role>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Roles in a stable order, for token claims and responses.
    pub fn sorted_roles(&self) -> Vec<Role> {
        let mut roles: Vec<Role> = self.roles.iter().copied().collect();
        roles.sort();
        roles
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub password_hash: PasswordHash,
    pub roles: HashSet<Role>,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        email: Email,
        password_hash: PasswordHash,
        role: Role,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            email,
            password_hash,
            roles: HashSet::from([role]),
            created_at,
        }
    }
}
