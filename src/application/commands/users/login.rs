use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthTokenDto, TokenSubject},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, Role, User},
};

pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginResult {
    pub token: AuthTokenDto,
    pub roles: Vec<Role>,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResult> {
        let user = self
            .find_and_authenticate_user(&command.email, &command.password)
            .await?;

        let subject = TokenSubject::from(&user);
        let roles = subject.roles.clone();
        let token = self.token_manager.issue(subject).await?;

        tracing::info!(user_id = %user.id, "user logged in");
        Ok(LoginResult { token, roles })
    }

    /// Unknown emails and wrong passwords fail with the same error.
    async fn find_and_authenticate_user(
        &self,
        email: &str,
        password: &str,
    ) -> ApplicationResult<User> {
        let invalid = || ApplicationError::unauthorized("invalid credentials");

        let email = Email::new(email).map_err(|_| invalid())?;
        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(invalid)?;

        self.password_hasher
            .verify(password, user.password_hash.as_str())
            .await
            .map_err(|err| match err {
                ApplicationError::Unauthorized(_) => invalid(),
                other => other,
            })?;

        Ok(user)
    }
}
