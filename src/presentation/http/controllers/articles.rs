// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleSummaryDto, CreatedArticleDto, DeletedArticleDto, PublicArticleDto},
};
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    /// Required; a blank title is rejected.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub is_published: Option<bool>,
}

/// Absent fields are left unchanged.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticleRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub is_published: Option<bool>,
}

/// Non-numeric ids are treated like unknown ones.
fn parse_article_id(raw: &str) -> HttpResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| HttpError::not_found("article not found"))
}

#[utoipa::path(
    get,
    path = "/articles/public",
    responses(
        (status = 200, description = "Published articles, newest first.", body = [PublicArticleDto])
    ),
    tag = "Articles"
)]
pub async fn list_public_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<PublicArticleDto>>> {
    state
        .services
        .article_queries
        .list_published()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/articles",
    responses(
        (status = 200, description = "Articles visible to the caller.", body = [ArticleSummaryDto]),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 403, description = "Caller has neither Admin nor Author role.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<ArticleSummaryDto>>> {
    state
        .services
        .article_queries
        .list_for_principal(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 200, description = "Article created.", body = CreatedArticleDto),
        (status = 400, description = "Blank title.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 403, description = "Caller has neither Admin nor Author role.", body = ErrorResponse),
        (status = 409, description = "Concurrent slug collision; retry.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<Json<CreatedArticleDto>> {
    let command = CreateArticleCommand {
        title: payload.title.unwrap_or_default(),
        content: payload.content,
        publish: payload.is_published.unwrap_or(false),
    };

    state
        .services
        .article_commands
        .create_article(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article updated.", body = ArticleSummaryDto),
        (status = 400, description = "Blank title.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 404, description = "No such article for this caller.", body = ErrorResponse),
        (status = 409, description = "Concurrent slug collision; retry.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleSummaryDto>> {
    let command = UpdateArticleCommand {
        id: parse_article_id(&id)?,
        title: payload.title,
        content: payload.content,
        publish: payload.is_published,
    };

    state
        .services
        .article_commands
        .update_article(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article deleted.", body = DeletedArticleDto),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 404, description = "No such article for this caller.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<DeletedArticleDto>> {
    let command = DeleteArticleCommand {
        id: parse_article_id(&id)?,
    };

    state
        .services
        .article_commands
        .delete_article(&user, command)
        .await
        .into_http()
        .map(Json)
}
