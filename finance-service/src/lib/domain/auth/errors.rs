use thiserror::Error;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::UserId;

/// Error for password validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("password must not be empty")]
    Empty,
}

/// Closed set of authentication failures.
///
/// `InvalidCredentials` covers both an unknown email and a wrong password.
/// `InvalidToken` and `ExpiredToken` stay distinct here for logging; the HTTP
/// boundary collapses them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("{0}")]
    Validation(String),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("email already registered: {0}")]
    DuplicateEmail(String),

    #[error("invalid token")]
    InvalidToken,

    #[error("token expired")]
    ExpiredToken,

    #[error("user not found: {0}")]
    UserNotFound(UserId),

    #[error("token error: {0}")]
    Token(String),

    #[error("password error: {0}")]
    Password(String),

    #[error("database error: {0}")]
    Database(String),
}

impl From<UserError> for AuthError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidName(_) | UserError::InvalidEmail(_) => {
                AuthError::Validation(err.to_string())
            }
            UserError::NotFound(id) => AuthError::UserNotFound(id),
            UserError::EmailAlreadyExists(email) => AuthError::DuplicateEmail(email),
            UserError::DatabaseError(msg) => AuthError::Database(msg),
        }
    }
}

impl From<PasswordPolicyError> for AuthError {
    fn from(err: PasswordPolicyError) -> Self {
        AuthError::Validation(format!("Invalid password: {}", err))
    }
}
