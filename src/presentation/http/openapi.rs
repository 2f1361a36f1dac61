// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::auth::register,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::articles::list_public_articles,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::probes::health,
        crate::presentation::http::controllers::probes::articles_ping,
        crate::presentation::http::controllers::probes::admin_only,
        crate::presentation::http::controllers::probes::author_or_admin
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::auth::RegisterRequest,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::auth::LoginResponse,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::UpdateArticleRequest,
            crate::application::dto::RegisteredUserDto,
            crate::application::dto::PublicArticleDto,
            crate::application::dto::ArticleSummaryDto,
            crate::application::dto::CreatedArticleDto,
            crate::application::dto::DeletedArticleDto,
            crate::domain::user::Role
        )
    ),
    tags(
        (name = "Auth", description = "Registration and login"),
        (name = "Articles", description = "Article publishing and management"),
        (name = "System", description = "Health and role probes")
    ),
    modifiers(&BearerSecurity),
    info(
        title = "Portfolio Blog API",
        description = "Blog backend with role-scoped article management",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("JWT".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

/// Swagger UI at `/docs`, Redoc at `/redoc`, the raw document at
/// [`OPENAPI_JSON_PATH`], and `/` redirecting to the Swagger UI.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url(OPENAPI_JSON_PATH, openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::temporary("/docs") }))
}
