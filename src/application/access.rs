// src/application/access.rs
//! Role-scoped article access.
//!
//! Every decision is derived from the principal's roles and id; nothing here
//! touches the store. Callers lacking both roles are rejected with
//! `Forbidden`. A principal that cannot touch a *specific* article gets
//! `NotFound` from the services, never `Forbidden`, so the article's
//! existence is not revealed.

use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::{
    article::{
        Article, ArticleScope, ArticleSpecification, CanAccessArticleSpec, PubliclyVisibleSpec,
    },
    user::Role,
};

pub const EDITOR_ROLES: [Role; 2] = [Role::Admin, Role::Author];

pub struct ArticleAccessGuard;

impl ArticleAccessGuard {
    pub fn can_list(actor: &AuthenticatedUser) -> ApplicationResult<ArticleScope> {
        ArticleScope::resolve(&actor.roles, actor.id)
            .ok_or_else(|| ApplicationError::forbidden("Admin or Author role required"))
    }

    pub fn can_access(actor: &AuthenticatedUser, article: &Article) -> bool {
        CanAccessArticleSpec::new(&actor.roles, article, actor.id).is_satisfied()
    }

    pub fn is_public_visible(article: &Article) -> bool {
        PubliclyVisibleSpec::new(article).is_satisfied()
    }

    pub fn ensure_editor(actor: &AuthenticatedUser) -> ApplicationResult<()> {
        Self::ensure_any_role(actor, &EDITOR_ROLES)
    }

    pub fn ensure_any_role(actor: &AuthenticatedUser, roles: &[Role]) -> ApplicationResult<()> {
        if actor.has_any_role(roles) {
            Ok(())
        } else {
            let names: Vec<&str> = roles.iter().map(Role::as_str).collect();
            Err(ApplicationError::forbidden(format!(
                "one of the roles [{}] is required",
                names.join(", ")
            )))
        }
    }
}
