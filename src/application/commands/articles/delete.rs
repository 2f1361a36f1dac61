// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::application::{
    access::ArticleAccessGuard,
    dto::{AuthenticatedUser, DeletedArticleDto},
    error::ApplicationResult,
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<DeletedArticleDto> {
        ArticleAccessGuard::ensure_editor(actor)?;
        let article = self.find_accessible(actor, command.id).await?;

        self.write_repo.delete(article.id).await?;
        tracing::info!(article_id = %article.id, editor_id = %actor.id, "article deleted");

        Ok(DeletedArticleDto::new(article.id.into()))
    }
}
