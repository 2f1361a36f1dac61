// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        access::ArticleAccessGuard,
        dto::{AuthenticatedUser, CreatedArticleDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleContent, ArticleTitle, NewArticle},
        errors::DomainError,
    },
};

pub struct CreateArticleCommand {
    pub title: String,
    pub content: Option<String>,
    pub publish: bool,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    publish: bool,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn publish(mut self, publish: bool) -> Self {
        self.publish = publish;
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content,
            publish: self.publish,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<CreatedArticleDto> {
        ArticleAccessGuard::ensure_editor(actor)?;

        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content.unwrap_or_default());
        let slug = self.slug_service.generate_unique_slug(&title, None).await?;

        let new_article = NewArticle {
            title,
            slug,
            content,
            published: command.publish,
            author_id: actor.id,
            created_at: self.clock.now(),
        };

        // The author row is the only reference an insert can miss: the token
        // is valid but its account has since been removed.
        let created = self
            .write_repo
            .insert(new_article)
            .await
            .map_err(|err| match err {
                DomainError::NotFound(_) => {
                    ApplicationError::unauthorized("account no longer exists")
                }
                other => other.into(),
            })?;
        tracing::info!(
            article_id = %created.id,
            author_id = %created.author_id,
            slug = %created.slug,
            status = ?created.status(),
            "article created"
        );
        Ok(created.into())
    }
}
