// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};

use portfolio_blog::domain::article::*;
use portfolio_blog::domain::user::UserId;

use super::mocks::fixed_now;

pub struct ArticleBuilder {
    id: i64,
    title: String,
    slug: String,
    content: String,
    published: bool,
    author_id: i64,
    created_at: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Test Article".into(),
            slug: "test-article".into(),
            content: "Test content".into(),
            published: false,
            author_id: 2,
            created_at: fixed_now() - Duration::days(1),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn published(mut self) -> Self {
        self.published = true;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn author(mut self, author_id: i64) -> Self {
        self.author_id = author_id;
        self
    }

    /// Offsets `created_at` from the builder default by `minutes`.
    pub fn created_minutes_later(mut self, minutes: i64) -> Self {
        self.created_at += Duration::minutes(minutes);
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            slug: ArticleSlug::new(self.slug).unwrap(),
            content: ArticleContent::new(self.content),
            published: self.published,
            author_id: UserId::new(self.author_id).unwrap(),
            created_at: self.created_at,
            updated_at: None,
        }
    }
}
