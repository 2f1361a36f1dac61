use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleContent, ArticleId, ArticleReadRepository, ArticleScope, ArticleSlug,
    ArticleTitle, ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

const ARTICLE_COLUMNS: &str =
    "id, title, slug, content, published, author_id, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: SqlitePool,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: SqlitePool,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    slug: String,
    content: String,
    published: bool,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            slug: ArticleSlug::new(row.slug)?,
            content: ArticleContent::new(row.content),
            published: row.published,
            author_id: UserId::new(row.author_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn into_articles(rows: Vec<ArticleRow>) -> DomainResult<Vec<Article>> {
    rows.into_iter().map(Article::try_from).collect()
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            slug,
            content,
            published,
            author_id,
            created_at,
        } = article;

        let sql = format!(
            "INSERT INTO articles
                 (title, slug, content, published, author_id, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, NULL)
             RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(title.as_str())
            .bind(slug.as_str())
            .bind(content.as_str())
            .bind(published)
            .bind(i64::from(author_id))
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            slug,
            content,
            published,
            updated_at,
        } = update;

        let sql = format!(
            "UPDATE articles
             SET title = COALESCE(?, title),
                 slug = COALESCE(?, slug),
                 content = COALESCE(?, content),
                 published = COALESCE(?, published),
                 updated_at = ?
             WHERE id = ?
             RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(title.as_ref().map(ArticleTitle::as_str))
            .bind(slug.as_ref().map(ArticleSlug::as_str))
            .bind(content.as_ref().map(ArticleContent::as_str))
            .bind(published)
            .bind(updated_at)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = ?");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn slug_exists(
        &self,
        slug: &ArticleSlug,
        exclude: Option<ArticleId>,
    ) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM articles WHERE slug = ? AND (? IS NULL OR id <> ?))",
        )
        .bind(slug.as_str())
        .bind(exclude.map(i64::from))
        .bind(exclude.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn list_published(&self) -> DomainResult<Vec<Article>> {
        let sql = format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles
             WHERE published = 1
             ORDER BY created_at DESC, id DESC"
        );
        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        into_articles(rows)
    }

    async fn list_in_scope(&self, scope: &ArticleScope) -> DomainResult<Vec<Article>> {
        let rows = match scope {
            ArticleScope::All => {
                let sql = format!(
                    "SELECT {ARTICLE_COLUMNS} FROM articles ORDER BY created_at DESC, id DESC"
                );
                sqlx::query_as::<_, ArticleRow>(&sql)
                    .fetch_all(&self.pool)
                    .await
            }
            ArticleScope::OwnedBy(author_id) => {
                let sql = format!(
                    "SELECT {ARTICLE_COLUMNS} FROM articles
                     WHERE author_id = ?
                     ORDER BY created_at DESC, id DESC"
                );
                sqlx::query_as::<_, ArticleRow>(&sql)
                    .bind(i64::from(*author_id))
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(map_sqlx)?;

        into_articles(rows)
    }
}
