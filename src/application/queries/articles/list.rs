use super::ArticleQueryService;
use crate::application::{
    access::ArticleAccessGuard,
    dto::{ArticleSummaryDto, AuthenticatedUser, PublicArticleDto},
    error::ApplicationResult,
};

impl ArticleQueryService {
    /// Published articles for anonymous readers, newest first.
    pub async fn list_published(&self) -> ApplicationResult<Vec<PublicArticleDto>> {
        let records = self.read_repo.list_published().await?;
        Ok(records
            .into_iter()
            .filter(ArticleAccessGuard::is_public_visible)
            .map(Into::into)
            .collect())
    }

    /// Everything the principal may manage: all articles for an Admin,
    /// only their own (drafts included) for an Author.
    pub async fn list_for_principal(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<ArticleSummaryDto>> {
        let scope = ArticleAccessGuard::can_list(actor)?;
        let records = self.read_repo.list_in_scope(&scope).await?;
        Ok(records
            .into_iter()
            .filter(|article| scope.includes(article))
            .map(Into::into)
            .collect())
    }
}
