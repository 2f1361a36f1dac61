// tests/support/mocks/article_repos.rs
use async_trait::async_trait;
use portfolio_blog::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleScope, ArticleSlug, ArticleUpdate,
    ArticleWriteRepository, NewArticle,
};
use portfolio_blog::domain::errors::{DomainError, DomainResult};
use std::sync::Mutex;

/// Article table kept in memory. Enforces slug uniqueness on write the way
/// the SQLite `UNIQUE` constraint does.
#[derive(Default)]
pub struct InMemoryArticleStore {
    inner: Mutex<Store>,
}

#[derive(Default)]
struct Store {
    next_id: i64,
    rows: Vec<Article>,
}

impl InMemoryArticleStore {
    pub fn with_articles(articles: Vec<Article>) -> Self {
        let next_id = articles
            .iter()
            .map(|a| i64::from(a.id))
            .max()
            .unwrap_or(0);
        Self {
            inner: Mutex::new(Store {
                next_id,
                rows: articles,
            }),
        }
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        self.inner
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|a| i64::from(a.id) == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }

    pub fn slugs(&self) -> Vec<String> {
        self.inner
            .lock()
            .unwrap()
            .rows
            .iter()
            .map(|a| a.slug.as_str().to_string())
            .collect()
    }

    fn sorted(mut rows: Vec<Article>) -> Vec<Article> {
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| i64::from(b.id).cmp(&i64::from(a.id)))
        });
        rows
    }
}

/// In-memory counterpart of the `COALESCE` update in the SQLite repository.
fn apply_update(update: &ArticleUpdate, article: &mut Article) {
    if let Some(title) = &update.title {
        article.title = title.clone();
    }
    if let Some(slug) = &update.slug {
        article.slug = slug.clone();
    }
    if let Some(content) = &update.content {
        article.content = content.clone();
    }
    if let Some(published) = update.published {
        article.published = published;
    }
    article.updated_at = Some(update.updated_at);
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut store = self.inner.lock().unwrap();
        if store.rows.iter().any(|a| a.slug == article.slug) {
            return Err(DomainError::slug_collision());
        }

        store.next_id += 1;
        let created = Article {
            id: ArticleId::new(store.next_id)?,
            title: article.title,
            slug: article.slug,
            content: article.content,
            published: article.published,
            author_id: article.author_id,
            created_at: article.created_at,
            updated_at: None,
        };
        store.rows.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut store = self.inner.lock().unwrap();
        if let Some(slug) = &update.slug {
            if store.rows.iter().any(|a| &a.slug == slug && a.id != update.id) {
                return Err(DomainError::slug_collision());
            }
        }

        let article = store
            .rows
            .iter_mut()
            .find(|a| a.id == update.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        apply_update(&update, article);
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut store = self.inner.lock().unwrap();
        let before = store.rows.len();
        store.rows.retain(|a| a.id != id);
        if store.rows.len() == before {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let store = self.inner.lock().unwrap();
        Ok(store.rows.iter().find(|a| a.id == id).cloned())
    }

    async fn slug_exists(
        &self,
        slug: &ArticleSlug,
        exclude: Option<ArticleId>,
    ) -> DomainResult<bool> {
        let store = self.inner.lock().unwrap();
        Ok(store
            .rows
            .iter()
            .any(|a| &a.slug == slug && Some(a.id) != exclude))
    }

    async fn list_published(&self) -> DomainResult<Vec<Article>> {
        let store = self.inner.lock().unwrap();
        Ok(Self::sorted(
            store.rows.iter().filter(|a| a.published).cloned().collect(),
        ))
    }

    async fn list_in_scope(&self, scope: &ArticleScope) -> DomainResult<Vec<Article>> {
        let store = self.inner.lock().unwrap();
        Ok(Self::sorted(
            store
                .rows
                .iter()
                .filter(|a| scope.includes(a))
                .cloned()
                .collect(),
        ))
    }
}
