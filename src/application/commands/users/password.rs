use crate::application::error::{ApplicationError, ApplicationResult};

pub(super) const MIN_PASSWORD_LENGTH: usize = 6;

/// Checks every rule and reports all failures at once.
pub(super) fn validate_password(password: &str) -> ApplicationResult<()> {
    let mut failures = Vec::new();

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        failures.push(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        ));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        failures.push("password must contain a digit".to_string());
    }
    if !password.chars().any(char::is_lowercase) {
        failures.push("password must contain a lowercase letter".to_string());
    }
    if !password.chars().any(char::is_uppercase) {
        failures.push("password must contain an uppercase letter".to_string());
    }
    if !password.chars().any(|c| !c.is_alphanumeric()) {
        failures.push("password must contain a non-alphanumeric character".to_string());
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(ApplicationError::validation(failures.join("; ")))
    }
}
