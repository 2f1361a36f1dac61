use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::RegisteredUserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        user::{Email, NewUser, PasswordHash, Role, User},
    },
};

pub struct RegisterUserCommand {
    pub email: String,
    pub password: String,
}

const EMAIL_IN_USE: &str = "email already in use";

impl UserCommandService {
    /// Self-service registration. New accounts are always `Author`.
    pub async fn register(
        &self,
        command: RegisterUserCommand,
    ) -> ApplicationResult<RegisteredUserDto> {
        let email = Email::new(&command.email)?;
        if command.password.is_empty() {
            return Err(ApplicationError::validation("password is required"));
        }
        validate_password(&command.password)?;

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(ApplicationError::validation(EMAIL_IN_USE));
        }

        let user = self
            .create_and_insert_user(email, &command.password, Role::Author)
            .await
            .map_err(|err| match err {
                // A concurrent registration won the race for the same email.
                ApplicationError::Domain(DomainError::Conflict(_)) => {
                    ApplicationError::validation(EMAIL_IN_USE)
                }
                other => other,
            })?;

        tracing::info!(user_id = %user.id, email = %user.email, "user registered");
        Ok(RegisteredUserDto::new(user.email, Role::Author))
    }

    pub(super) async fn create_and_insert_user(
        &self,
        email: Email,
        password: &str,
        role: Role,
    ) -> ApplicationResult<User> {
        let hashed = self.password_hasher.hash(password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let new_user = NewUser::new(email, password_hash, role, self.clock.now());
        Ok(self.user_repo.insert(new_user).await?)
    }
}
