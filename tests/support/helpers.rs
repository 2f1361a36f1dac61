// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use portfolio_blog::application::ports::{
    security::{PasswordHasher, TokenManager},
    time::Clock,
    util::SlugGenerator,
};
use portfolio_blog::application::services::ApplicationServices;
use portfolio_blog::domain::article::{Article, ArticleReadRepository, ArticleWriteRepository};
use portfolio_blog::domain::user::UserRepository;
use portfolio_blog::infrastructure::security::JwtTokenManager;
use portfolio_blog::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;

pub const TEST_JWT_SECRET: &str = "test-secret-test-secret-test-secret!";
pub const TEST_ORIGIN: &str = "http://localhost:5173";

/// Everything a test may want to inspect after driving the router.
pub struct TestApp {
    pub router: axum::Router,
    pub services: Arc<ApplicationServices>,
    pub articles: Arc<mocks::InMemoryArticleStore>,
    pub users: Arc<mocks::InMemoryUserRepo>,
}

pub fn build_services(
    articles: Arc<mocks::InMemoryArticleStore>,
    users: Arc<mocks::InMemoryUserRepo>,
    token_manager: Arc<dyn TokenManager>,
) -> Arc<ApplicationServices> {
    let user_repo: Arc<dyn UserRepository> = users;
    let article_write: Arc<dyn ArticleWriteRepository> = Arc::clone(&articles) as _;
    let article_read: Arc<dyn ArticleReadRepository> = articles;
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(mocks::StrictPasswordHasher);
    let clock: Arc<dyn Clock> = Arc::new(mocks::TickingClock::default());
    let slugger: Arc<dyn SlugGenerator> = Arc::new(mocks::FixedSuffixSlug);

    Arc::new(ApplicationServices::new(
        user_repo,
        article_write,
        article_read,
        password_hasher,
        token_manager,
        clock,
        slugger,
    ))
}

fn assemble(articles: Vec<Article>, token_manager: Arc<dyn TokenManager>) -> TestApp {
    let articles = Arc::new(mocks::InMemoryArticleStore::with_articles(articles));
    let users = Arc::new(mocks::InMemoryUserRepo::default());
    let services = build_services(Arc::clone(&articles), Arc::clone(&users), token_manager);

    let state = HttpState {
        services: Arc::clone(&services),
    };
    let router = build_router(state, &[TEST_ORIGIN.to_string()]);

    TestApp {
        router,
        services,
        articles,
        users,
    }
}

/// Router whose bearer tokens are the fixed constants in `mocks::security`.
pub fn make_test_app(articles: Vec<Article>) -> TestApp {
    assemble(articles, Arc::new(mocks::DummyTokenManager))
}

pub fn make_test_router() -> axum::Router {
    make_test_app(Vec::new()).router
}

/// Router backed by a real JWT manager, for register/login round trips.
pub fn make_jwt_test_app() -> TestApp {
    let token_manager = JwtTokenManager::new(
        TEST_JWT_SECRET,
        "PortfolioBlog",
        "PortfolioBlog",
        std::time::Duration::from_secs(8 * 3600),
    )
    .expect("test token manager");
    assemble(Vec::new(), Arc::new(token_manager))
}

pub fn bearer(tok: &str) -> String {
    format!("Bearer {tok}")
}

pub fn json_request(method: Method, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, bearer(token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn empty_request(method: Method, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, bearer(token));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

pub async fn body_text(resp: axum::response::Response) -> String {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");

    let json = body_json(resp).await;
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    json
}
