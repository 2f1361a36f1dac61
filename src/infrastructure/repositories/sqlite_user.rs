// src/infrastructure/repositories/sqlite_user.rs
use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::user::{Email, NewUser, PasswordHash, Role, User, UserId, UserRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::collections::HashSet;

#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn roles_of(&self, user_id: i64) -> DomainResult<HashSet<Role>> {
        let names = sqlx::query_scalar::<_, String>("SELECT role FROM user_roles WHERE user_id = ?")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        names.iter().map(|name| name.parse()).collect()
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self, roles: HashSet<Role>) -> DomainResult<User> {
        Ok(User {
            id: UserId::new(self.id)?,
            email: Email::new(&self.email)?,
            password_hash: PasswordHash::new(self.password_hash)?,
            roles,
            created_at: self.created_at,
        })
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            email,
            password_hash,
            roles,
            created_at,
        } = new_user;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (email, password_hash, created_at)
             VALUES (?, ?, ?)
             RETURNING id, email, password_hash, created_at",
        )
        .bind(email.as_str())
        .bind(password_hash.as_str())
        .bind(created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        for role in &roles {
            sqlx::query("INSERT INTO user_roles (user_id, role) VALUES (?, ?)")
                .bind(row.id)
                .bind(role.as_str())
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)?;
        row.into_user(roles)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, password_hash, created_at FROM users WHERE email = ?",
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let Some(row) = row else {
            return Ok(None);
        };
        let roles = self.roles_of(row.id).await?;
        row.into_user(roles).map(Some)
    }
}
