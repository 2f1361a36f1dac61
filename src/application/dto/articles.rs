use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Anonymous projection: content and authorship are withheld.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

impl From<Article> for PublicArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            created_at: article.created_at,
        }
    }
}

/// Management projection used by the principal listing and by update
/// responses. Content and author id are not included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummaryDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Article> for ArticleSummaryDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            is_published: article.published,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Article> for CreatedArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            is_published: article.published,
            created_at: article.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeletedArticleDto {
    pub message: String,
    pub id: i64,
}

impl DeletedArticleDto {
    pub fn new(id: i64) -> Self {
        Self {
            message: "Deleted".into(),
            id,
        }
    }
}
