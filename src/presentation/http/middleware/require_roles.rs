// src/presentation/http/middleware/require_roles.rs
use crate::application::access::EDITOR_ROLES;
use crate::application::error::ApplicationError;
use crate::domain::user::Role;
use crate::presentation::http::error::HttpError;
use crate::presentation::http::state::HttpState;
use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

/// Rejects the request unless the bearer token is valid and carries one of
/// `roles`. The verified principal is stored in the request extensions.
///
/// Usage: `axum::middleware::from_fn(|req, next| require_roles(req, next, &[Role::Admin]))`
pub async fn require_roles(mut req: Request<Body>, next: Next, roles: &'static [Role]) -> Response {
    let Some(header) = req.headers().typed_get::<Authorization<Bearer>>() else {
        return HttpError::from_error(ApplicationError::unauthorized("missing bearer token"))
            .into_response();
    };

    let Some(state) = req.extensions().get::<HttpState>().cloned() else {
        return HttpError::from_error(ApplicationError::infrastructure(
            "application state missing",
        ))
        .into_response();
    };

    match state
        .services
        .authenticate_and_authorize(header.token(), roles)
        .await
    {
        Ok(user) => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Err(err) => HttpError::from_error(err).into_response(),
    }
}

pub async fn require_admin(req: Request<Body>, next: Next) -> Response {
    require_roles(req, next, &[Role::Admin]).await
}

pub async fn require_editor(req: Request<Body>, next: Next) -> Response {
    require_roles(req, next, &EDITOR_ROLES).await
}
