pub mod entity;
pub mod repository;
pub mod services;
pub mod specifications;
pub mod value_objects;

pub use entity::{Article, ArticleStatus, ArticleUpdate, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use specifications::{
    ArticleScope, ArticleSpecification, CanAccessArticleSpec, PubliclyVisibleSpec,
};
pub use value_objects::{ArticleContent, ArticleId, ArticleSlug, ArticleTitle};
