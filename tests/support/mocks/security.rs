// tests/support/mocks/security.rs
use async_trait::async_trait;
use portfolio_blog::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use portfolio_blog::domain::user::{Role, UserId};

/// テスト用トークン定数（タイポ防止とIDE補完のため）
pub const ADMIN_TOKEN: &str = "admin-token";
pub const AUTHOR_TOKEN: &str = "author-token";
pub const OTHER_AUTHOR_TOKEN: &str = "other-author-token";
pub const NO_ROLE_TOKEN: &str = "no-role-token";
pub const EXPIRED_TOKEN: &str = "expired-token";

pub const ADMIN_ID: i64 = 1;
pub const AUTHOR_ID: i64 = 2;
pub const OTHER_AUTHOR_ID: i64 = 3;
pub const NO_ROLE_ID: i64 = 4;

/* -------------------------------- TokenManager -------------------------------- */

/// Maps the fixed token constants above to principals. Issued tokens are
/// opaque strings that this manager does not accept back.
#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        Ok(AuthTokenDto {
            token: format!("issued-for-{}", subject.user_id),
            expires_in: 8 * 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        match token {
            ADMIN_TOKEN => Ok(principal(ADMIN_ID, &[Role::Admin])),
            AUTHOR_TOKEN => Ok(principal(AUTHOR_ID, &[Role::Author])),
            OTHER_AUTHOR_TOKEN => Ok(principal(OTHER_AUTHOR_ID, &[Role::Author])),
            NO_ROLE_TOKEN => Ok(principal(NO_ROLE_ID, &[])),
            EXPIRED_TOKEN => Err(ApplicationError::unauthorized("token expired")),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}

pub fn principal(id: i64, roles: &[Role]) -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::new(id).expect("invalid user id"),
        email: format!("user{id}@demo.com"),
        roles: roles.iter().copied().collect(),
    }
}

/* -------------------------------- PasswordHasher -------------------------------- */

/// 平文比較のパスワードハッシャー（Argon2 を使わず高速に検証する）
#[derive(Clone, Debug, Default)]
pub struct StrictPasswordHasher;

#[async_trait]
impl PasswordHasher for StrictPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("hashed:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}
