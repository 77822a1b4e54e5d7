use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("No user is logged in")]
    NotLoggedIn,

    #[error("Admin authorization required")]
    Unauthorized,

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Text shown to the person at the keyboard.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidInput(_) => "Please fill all fields".to_string(),
            AppError::DuplicateEmail(_) => "Email already registered".to_string(),
            AppError::InvalidCredentials => "Invalid credentials".to_string(),
            AppError::NotFound(what) => format!("{} not found", what),
            AppError::NotLoggedIn => "Please login first".to_string(),
            AppError::Unauthorized => "Please login as admin first".to_string(),
            AppError::Storage(msg) => format!("Could not save changes: {}", msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn user_messages_match_portal_wording() {
        assert_eq!(
            AppError::DuplicateEmail("a@x.com".into()).user_message(),
            "Email already registered"
        );
        assert_eq!(
            AppError::InvalidInput("name".into()).user_message(),
            "Please fill all fields"
        );
        assert_eq!(AppError::InvalidCredentials.user_message(), "Invalid credentials");
        assert_eq!(AppError::NotLoggedIn.user_message(), "Please login first");
    }

    #[test]
    fn result_alias_carries_app_error() {
        let result: AppResult<()> = Err(AppError::InvalidInput("email".into()));
        assert_matches!(result, Err(AppError::InvalidInput(field)) if field == "email");
    }
}
