// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleContent, ArticleId, ArticleSlug, ArticleTitle};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// Visibility state of an article. Moves in both directions, only through an
/// authorized update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleStatus {
    Draft,
    Published,
}

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub published: bool,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Article {
    pub fn status(&self) -> ArticleStatus {
        if self.published {
            ArticleStatus::Published
        } else {
            ArticleStatus::Draft
        }
    }

    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }

    /// Timestamp to record for a mutation made at `now`. Never precedes
    /// `created_at`, even if the clock moved backwards.
    pub fn mutation_time(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now.max(self.created_at)
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub published: bool,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Column-level change set handed to the write repository. Absent fields are
/// left untouched; `updated_at` is always written.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub slug: Option<ArticleSlug>,
    pub content: Option<ArticleContent>,
    pub published: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    /// Empty change set for `article`, stamped via [`Article::mutation_time`].
    pub fn new(article: &Article, now: DateTime<Utc>) -> Self {
        Self {
            id: article.id,
            title: None,
            slug: None,
            content: None,
            published: None,
            updated_at: article.mutation_time(now),
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: ArticleSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_content(mut self, content: ArticleContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }
}
