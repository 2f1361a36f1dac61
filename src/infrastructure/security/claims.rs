// src/infrastructure/security/claims.rs
use crate::application::{
    dto::{AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::{Role, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// JWT payload carried by access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub roles: Vec<Role>,
    pub iss: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(
        subject: TokenSubject,
        issuer: &str,
        audience: &str,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            sub: subject.user_id.to_string(),
            email: subject.email,
            roles: subject.roles,
            iss: issuer.to_owned(),
            aud: audience.to_owned(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        }
    }
}

impl TryFrom<Claims> for AuthenticatedUser {
    type Error = ApplicationError;

    fn try_from(claims: Claims) -> ApplicationResult<Self> {
        let id = claims
            .sub
            .parse::<i64>()
            .ok()
            .and_then(|raw| UserId::new(raw).ok())
            .ok_or_else(|| ApplicationError::unauthorized("invalid subject claim"))?;

        Ok(AuthenticatedUser {
            id,
            email: claims.email,
            roles: claims.roles.into_iter().collect(),
        })
    }
}
