// tests/support/mocks/user_repo.rs
use async_trait::async_trait;
use portfolio_blog::domain::errors::{DomainError, DomainResult};
use portfolio_blog::domain::user::{Email, NewUser, User, UserId, UserRepository};
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryUserRepo {
    inner: Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn get(&self, email: &str) -> Option<User> {
        let email = Email::new(email).ok()?;
        self.inner
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.inner.lock().unwrap();
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(DomainError::email_taken());
        }

        let user = User {
            id: UserId::new(users.len() as i64 + 1)?,
            email: new_user.email,
            password_hash: new_user.password_hash,
            roles: new_user.roles,
            created_at: new_user.created_at,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let users = self.inner.lock().unwrap();
        Ok(users.iter().find(|u| &u.email == email).cloned())
    }
}
