// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// A principal whose bearer token passed verification.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

pub(crate) async fn state_from_parts<S>(
    parts: &mut Parts,
    state: &S,
) -> Result<HttpState, HttpError>
where
    S: Send + Sync,
{
    Extension::<HttpState>::from_request_parts(parts, state)
        .await
        .map(|Extension(state)| state)
        .map_err(|_| {
            HttpError::from_error(ApplicationError::infrastructure("application state missing"))
        })
}

pub(crate) fn bearer_token(parts: &Parts) -> Result<String, HttpError> {
    parts
        .headers
        .typed_get::<Authorization<Bearer>>()
        .map(|header| header.token().to_owned())
        .ok_or_else(|| {
            HttpError::from_error(ApplicationError::unauthorized("missing bearer token"))
        })
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Set by the role middleware when it already verified this request.
        if let Some(user) = parts.extensions.get::<AuthenticatedUser>() {
            return Ok(Self(user.clone()));
        }

        let app_state = state_from_parts(parts, state).await?;
        let token = bearer_token(parts)?;

        let user = app_state
            .services
            .token_manager()
            .authenticate(&token)
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(user))
    }
}
