// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, auth, probes},
    middleware::{require_admin, require_editor},
    openapi,
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    middleware::from_fn,
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter(|origin| {
            // A wildcard cannot be combined with credentialed CORS.
            let wildcard = origin.as_str() == "*";
            if wildcard {
                tracing::warn!("ignoring wildcard CORS origin");
            }
            !wildcard
        })
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let role_probes = Router::new()
        .route(
            "/test/admin",
            get(probes::admin_only).route_layer(from_fn(require_admin)),
        )
        .route(
            "/test/author",
            get(probes::author_or_admin).route_layer(from_fn(require_editor)),
        );

    Router::new()
        .merge(openapi::docs_router())
        .merge(role_probes)
        .route("/health", get(probes::health))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/articles/ping", get(probes::articles_ping))
        .route("/articles/public", get(articles::list_public_articles))
        .route(
            "/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/articles/{id}",
            put(articles::update_article).delete(articles::delete_article),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}
