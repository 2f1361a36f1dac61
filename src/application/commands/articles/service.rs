// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        access::ArticleAccessGuard,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::article::{
        Article, ArticleId, ArticleReadRepository, ArticleWriteRepository,
        services::ArticleSlugService,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        slug_service: Arc<ArticleSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            clock,
        }
    }

    /// Loads an article the actor may modify. Missing, malformed and
    /// inaccessible ids all come back as the same `NotFound`.
    pub(super) async fn find_accessible(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<Article> {
        let not_found = || ApplicationError::not_found("article not found");

        let id = ArticleId::new(id).map_err(|_| not_found())?;
        self.read_repo
            .find_by_id(id)
            .await?
            .filter(|article| ArticleAccessGuard::can_access(actor, article))
            .ok_or_else(not_found)
    }
}
