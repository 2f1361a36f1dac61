// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::users::{LoginResult, LoginUserCommand, RegisterUserCommand},
    dto::RegisteredUserDto,
};
use crate::domain::user::Role;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Any client-supplied role is ignored; self-registered accounts are Authors.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub roles: Vec<Role>,
}

impl From<LoginResult> for LoginResponse {
    fn from(result: LoginResult) -> Self {
        Self {
            access_token: result.token.token,
            expires_in: result.token.expires_in,
            roles: result.roles,
        }
    }
}

#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Author account created.", body = RegisteredUserDto),
        (status = 400, description = "Missing fields, weak password or email already in use.", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<RegisterRequest>,
) -> HttpResult<Json<RegisteredUserDto>> {
    let command = RegisterUserCommand {
        email: payload.email,
        password: payload.password,
    };

    state
        .services
        .user_commands
        .register(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Bearer token issued.", body = LoginResponse),
        (status = 401, description = "Invalid credentials.", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<LoginResponse>> {
    let command = LoginUserCommand {
        email: payload.email,
        password: payload.password,
    };

    state
        .services
        .user_commands
        .login(command)
        .await
        .into_http()
        .map(|result| Json(result.into()))
}
