use anyhow::{Context, Result};
use portfolio_blog::application::{
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
        util::SlugGenerator,
    },
    services::ApplicationServices,
};
use portfolio_blog::config::AppConfig;
use portfolio_blog::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    user::UserRepository,
};
use portfolio_blog::infrastructure::{
    database,
    repositories::{
        SqliteArticleReadRepository, SqliteArticleWriteRepository, SqliteUserRepository,
    },
    security::{Argon2PasswordHasher, JwtTokenManager},
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use portfolio_blog::presentation::http::{routes::build_router, state::HttpState};
use portfolio_blog::telemetry::init_tracing;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    // Loads `.env` first so a `RUST_LOG` defined there reaches the filter.
    let config = AppConfig::from_env().context("loading configuration")?;
    init_tracing();

    let pool = database::init_pool(config.database_url())
        .await
        .context("opening database")?;
    database::run_migrations(&pool)
        .await
        .context("running migrations")?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(pool.clone()));
    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(SqliteArticleWriteRepository::new(pool.clone()));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(SqliteArticleReadRepository::new(pool.clone()));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let token_manager: Arc<dyn TokenManager> = Arc::new(JwtTokenManager::new(
        config.jwt_secret(),
        config.jwt_issuer(),
        config.jwt_audience(),
        config.token_ttl(),
    )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        article_write_repo,
        article_read_repo,
        password_hasher,
        token_manager,
        clock,
        slugger,
    ));

    if config.seed_demo_users() {
        let created = services.user_commands.seed_demo_accounts().await?;
        tracing::info!(created, "demo accounts ensured");
    }

    let state = HttpState {
        services: Arc::clone(&services),
    };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .with_context(|| format!("binding {}", config.listen_addr()))?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
