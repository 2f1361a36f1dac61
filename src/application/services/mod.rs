// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        access::ArticleAccessGuard,
        commands::{articles::ArticleCommandService, users::UserCommandService},
        dto::AuthenticatedUser,
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
            util::SlugGenerator,
        },
        queries::articles::ArticleQueryService,
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugService},
        user::{Role, UserRepository},
    },
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&clock),
        ));

        let slug_service = Arc::new(ArticleSlugService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&slugger),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));

        Self {
            user_commands,
            article_commands,
            article_queries,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }

    /// Verify a raw bearer token and require at least one of `roles`.
    /// An empty `roles` slice only authenticates.
    pub async fn authenticate_and_authorize(
        &self,
        token: &str,
        roles: &[Role],
    ) -> ApplicationResult<AuthenticatedUser> {
        let user = self.token_manager.authenticate(token).await?;
        if !roles.is_empty() {
            ArticleAccessGuard::ensure_any_role(&user, roles)?;
        }
        Ok(user)
    }
}
