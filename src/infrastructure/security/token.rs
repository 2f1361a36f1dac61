// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use crate::infrastructure::security::claims::Claims;
use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use std::time::Duration;

pub const MIN_SECRET_LEN: usize = 32;

/// Issues and verifies HS256 JWTs bound to one issuer and audience.
#[derive(Clone)]
pub struct JwtTokenManager {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    issuer: String,
    audience: String,
    ttl: ChronoDuration,
}

impl JwtTokenManager {
    pub fn new(
        secret: &str,
        issuer: impl Into<String>,
        audience: impl Into<String>,
        ttl: Duration,
    ) -> ApplicationResult<Self> {
        if secret.len() < MIN_SECRET_LEN {
            return Err(ApplicationError::infrastructure(format!(
                "token secret must be at least {MIN_SECRET_LEN} bytes"
            )));
        }
        let ttl = ChronoDuration::from_std(ttl)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        let issuer = issuer.into();
        let audience = audience.into();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[issuer.as_str()]);
        validation.set_audience(&[audience.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);

        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            issuer,
            audience,
            ttl,
        })
    }
}

#[async_trait]
impl TokenManager for JwtTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = Utc::now();
        let expires_at = issued_at
            .checked_add_signed(self.ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;

        let claims = Claims::new(subject, &self.issuer, &self.audience, issued_at, expires_at);
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(AuthTokenDto {
            token,
            expires_in: self.ttl.num_seconds().max(0),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|err| {
            let reason = match err.kind() {
                ErrorKind::ExpiredSignature => "token expired",
                ErrorKind::InvalidIssuer => "invalid token issuer",
                ErrorKind::InvalidAudience => "invalid token audience",
                ErrorKind::InvalidSignature => "invalid token signature",
                _ => "invalid token",
            };
            tracing::debug!(error = %err, "bearer token rejected");
            ApplicationError::unauthorized(reason)
        })?;

        AuthenticatedUser::try_from(data.claims)
    }
}
