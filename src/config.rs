// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

pub const MIN_JWT_SECRET_LEN: usize = 32;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    jwt_secret: String,
    jwt_issuer: String,
    jwt_audience: String,
    token_ttl: Duration,
    allowed_origins: Vec<String>,
    seed_demo_users: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://blog.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_jwt_party() -> String {
    "PortfolioBlog".into()
}

fn default_token_ttl() -> u64 {
    8 * 60 * 60
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:5173".into()]
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Invalid(format!("{key} must be a boolean, got '{other}'"))),
    }
}

impl AppConfig {
    /// Build configuration from process environment variables, after loading
    /// a `.env` file when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Blank values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url = get("DATABASE_URL").unwrap_or_else(default_database_url);
        let listen_addr = get("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let jwt_secret = get("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
        if jwt_secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::Invalid(format!(
                "JWT_SECRET must be at least {MIN_JWT_SECRET_LEN} bytes"
            )));
        }
        let jwt_issuer = get("JWT_ISSUER").unwrap_or_else(default_jwt_party);
        let jwt_audience = get("JWT_AUDIENCE").unwrap_or_else(default_jwt_party);

        let token_ttl_secs = match get("TOKEN_TTL_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    ConfigError::Invalid("TOKEN_TTL_SECONDS must be a positive integer".into())
                })?,
            None => default_token_ttl(),
        };

        let allowed_origins = get("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);
        if allowed_origins.iter().any(|origin| origin == "*") {
            return Err(ConfigError::Invalid(
                "ALLOWED_ORIGINS cannot contain '*' when credentials are allowed".into(),
            ));
        }

        let seed_demo_users = get("SEED_DEMO_USERS")
            .map(|raw| parse_bool("SEED_DEMO_USERS", &raw))
            .transpose()?
            .unwrap_or(true);

        Ok(Self {
            database_url,
            listen_addr,
            jwt_secret,
            jwt_issuer,
            jwt_audience,
            token_ttl: Duration::from_secs(token_ttl_secs),
            allowed_origins,
            seed_demo_users,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }

    pub fn jwt_issuer(&self) -> &str {
        &self.jwt_issuer
    }

    pub fn jwt_audience(&self) -> &str {
        &self.jwt_audience
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn seed_demo_users(&self) -> bool {
        self.seed_demo_users
    }
}
