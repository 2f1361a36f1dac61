// src/domain/article/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::repository::ArticleReadRepository;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleTitle};
use crate::domain::errors::DomainResult;

/// Domain service responsible for producing unique slugs for articles.
///
/// Uniqueness is check-then-suffix: one lookup, and at most one random
/// suffix. A suffixed slug that collides again is not retried here; the
/// `UNIQUE` constraint on `articles.slug` rejects it at write time.
pub struct ArticleSlugService {
    read_repo: Arc<dyn ArticleReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl ArticleSlugService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    pub fn slugify(&self, title: &ArticleTitle) -> DomainResult<ArticleSlug> {
        ArticleSlug::new(self.generator.slugify(title.as_str()))
    }

    pub async fn ensure_unique(
        &self,
        candidate: ArticleSlug,
        exclude: Option<ArticleId>,
    ) -> DomainResult<ArticleSlug> {
        if !self.read_repo.slug_exists(&candidate, exclude).await? {
            return Ok(candidate);
        }

        let suffixed = candidate.with_suffix(&self.generator.collision_suffix())?;
        tracing::debug!(
            candidate = %candidate,
            slug = %suffixed,
            "slug already taken, appended suffix"
        );
        Ok(suffixed)
    }

    pub async fn generate_unique_slug(
        &self,
        title: &ArticleTitle,
        exclude: Option<ArticleId>,
    ) -> DomainResult<ArticleSlug> {
        let candidate = self.slugify(title)?;
        self.ensure_unique(candidate, exclude).await
    }
}
