use super::UserCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::user::{Email, Role},
};

pub struct DemoAccount {
    pub email: &'static str,
    pub password: &'static str,
    pub role: Role,
}

pub const DEMO_ACCOUNTS: [DemoAccount; 2] = [
    DemoAccount {
        email: "admin@demo.com",
        password: "Admin123!",
        role: Role::Admin,
    },
    DemoAccount {
        email: "author@demo.com",
        password: "Author123!",
        role: Role::Author,
    },
];

impl UserCommandService {
    /// Creates the account unless the email is already registered.
    /// Returns whether a new account was inserted.
    pub async fn ensure_account(
        &self,
        email: &str,
        password: &str,
        role: Role,
    ) -> ApplicationResult<bool> {
        let email = Email::new(email)?;
        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Ok(false);
        }

        let user = self.create_and_insert_user(email, password, role).await?;
        tracing::info!(
            user_id = %user.id,
            email = %user.email,
            role = role.as_str(),
            "seeded account"
        );
        Ok(true)
    }

    pub async fn seed_demo_accounts(&self) -> ApplicationResult<usize> {
        let mut created = 0;
        for account in &DEMO_ACCOUNTS {
            if self
                .ensure_account(account.email, account.password, account.role)
                .await?
            {
                created += 1;
            }
        }
        Ok(created)
    }
}
