use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::specifications::ArticleScope;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

/// Listing methods return articles newest first (`created_at` desc, then id desc).
#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn slug_exists(
        &self,
        slug: &ArticleSlug,
        exclude: Option<ArticleId>,
    ) -> DomainResult<bool>;
    async fn list_published(&self) -> DomainResult<Vec<Article>>;
    async fn list_in_scope(&self, scope: &ArticleScope) -> DomainResult<Vec<Article>>;
}
