//! Liveness and role-check endpoints.
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::openapi::StatusResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}

#[utoipa::path(
    get,
    path = "/articles/ping",
    responses((status = 200, description = "Articles routes are mounted.", body = String)),
    tag = "System"
)]
pub async fn articles_ping() -> &'static str {
    "Articles controller alive"
}

#[utoipa::path(
    get,
    path = "/test/admin",
    responses(
        (status = 200, description = "Caller is an Admin.", body = String),
        (status = 401, description = "Missing or invalid token."),
        (status = 403, description = "Caller is not an Admin.")
    ),
    security(("bearerAuth" = [])),
    tag = "System"
)]
pub async fn admin_only(Authenticated(user): Authenticated) -> &'static str {
    tracing::debug!(user_id = %user.id, "admin probe");
    "OK Admin"
}

#[utoipa::path(
    get,
    path = "/test/author",
    responses(
        (status = 200, description = "Caller is an Admin or Author.", body = String),
        (status = 401, description = "Missing or invalid token."),
        (status = 403, description = "Caller has neither role.")
    ),
    security(("bearerAuth" = [])),
    tag = "System"
)]
pub async fn author_or_admin(Authenticated(user): Authenticated) -> &'static str {
    tracing::debug!(user_id = %user.id, "author probe");
    "OK Author/Admin"
}
