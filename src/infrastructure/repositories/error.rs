use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

// SQLite reports unique violations as "UNIQUE constraint failed: <table>.<column>".
const UNIQUE_ARTICLE_SLUG: &str = "articles.slug";
const UNIQUE_USER_EMAIL: &str = "users.email";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => match db_err.kind() {
            ErrorKind::UniqueViolation => {
                let message = db_err.message();
                if message.contains(UNIQUE_ARTICLE_SLUG) {
                    DomainError::slug_collision()
                } else if message.contains(UNIQUE_USER_EMAIL) {
                    DomainError::email_taken()
                } else {
                    DomainError::Conflict("unique constraint violated".into())
                }
            }
            ErrorKind::ForeignKeyViolation => {
                DomainError::NotFound("referenced record not found".into())
            }
            ErrorKind::CheckViolation => {
                DomainError::Validation("check constraint violated".into())
            }
            _ => DomainError::Persistence(db_err.message().to_string()),
        },
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
