use crate::domain::user::{Email, Role};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisteredUserDto {
    pub message: String,
    pub email: String,
    pub role: Role,
}

impl RegisteredUserDto {
    pub fn new(email: Email, role: Role) -> Self {
        Self {
            message: "User created".into(),
            email: email.into(),
            role,
        }
    }
}
