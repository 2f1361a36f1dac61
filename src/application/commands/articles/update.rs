use super::ArticleCommandService;
use crate::{
    application::{
        access::ArticleAccessGuard,
        dto::{ArticleSummaryDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::{Article, ArticleContent, ArticleTitle, ArticleUpdate},
};

/// Partial update. `None` leaves the field unchanged.
#[derive(Debug, Default)]
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub publish: Option<bool>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleSummaryDto> {
        ArticleAccessGuard::ensure_editor(actor)?;
        let article = self.find_accessible(actor, command.id).await?;

        let UpdateArticleCommand {
            id: _,
            title,
            content,
            publish,
        } = command;

        // Validate before anything is written.
        let title = title.map(ArticleTitle::new).transpose()?;

        let mut update = ArticleUpdate::new(&article, self.clock.now());
        update = self.apply_title_change(&article, title, update).await?;

        if let Some(content) = content {
            update = update.with_content(ArticleContent::new(content));
        }
        if let Some(publish) = publish {
            update = update.with_published(publish);
        }

        let updated = self.write_repo.update(update).await?;
        tracing::info!(
            article_id = %updated.id,
            editor_id = %actor.id,
            status = ?updated.status(),
            "article updated"
        );
        Ok(updated.into())
    }

    /// The slug follows the title only when the title value actually changes;
    /// resubmitting the same title keeps the existing slug.
    async fn apply_title_change(
        &self,
        article: &Article,
        title: Option<ArticleTitle>,
        update: ArticleUpdate,
    ) -> ApplicationResult<ArticleUpdate> {
        let Some(title) = title.filter(|title| *title != article.title) else {
            return Ok(update);
        };

        let slug = self
            .slug_service
            .generate_unique_slug(&title, Some(article.id))
            .await?;
        Ok(update.with_title(title).with_slug(slug))
    }
}
