use std::collections::HashSet;

use crate::domain::article::entity::Article;
use crate::domain::user::value_objects::{Role, UserId};

pub trait ArticleSpecification {
    fn is_satisfied(&self) -> bool;
}

/// The set of articles a principal may list and manage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleScope {
    All,
    OwnedBy(UserId),
}

impl ArticleScope {
    /// Admin wins over Author. `None` means the principal holds neither role
    /// and must be stopped before reaching the store.
    pub fn resolve(roles: &HashSet<Role>, user_id: UserId) -> Option<Self> {
        if roles.contains(&Role::Admin) {
            Some(Self::All)
        } else if roles.contains(&Role::Author) {
            Some(Self::OwnedBy(user_id))
        } else {
            None
        }
    }

    pub fn includes(&self, article: &Article) -> bool {
        match self {
            Self::All => true,
            Self::OwnedBy(user_id) => article.is_authored_by(*user_id),
        }
    }
}

pub struct CanAccessArticleSpec<'a> {
    roles: &'a HashSet<Role>,
    article: &'a Article,
    user_id: UserId,
}

impl<'a> CanAccessArticleSpec<'a> {
    pub fn new(roles: &'a HashSet<Role>, article: &'a Article, user_id: UserId) -> Self {
        Self {
            roles,
            article,
            user_id,
        }
    }
}

impl ArticleSpecification for CanAccessArticleSpec<'_> {
    fn is_satisfied(&self) -> bool {
        self.roles.contains(&Role::Admin) || self.article.is_authored_by(self.user_id)
    }
}

pub struct PubliclyVisibleSpec<'a> {
    article: &'a Article,
}

impl<'a> PubliclyVisibleSpec<'a> {
    pub fn new(article: &'a Article) -> Self {
        Self { article }
    }
}

impl ArticleSpecification for PubliclyVisibleSpec<'_> {
    fn is_satisfied(&self) -> bool {
        self.article.published
    }
}
