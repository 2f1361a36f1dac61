pub mod articles;
pub mod auth;
pub mod users;

pub use articles::{ArticleSummaryDto, CreatedArticleDto, DeletedArticleDto, PublicArticleDto};
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use users::RegisteredUserDto;
