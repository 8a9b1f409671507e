use thiserror::Error;

use crate::domain::user::models::UserId;

/// Error for UserName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserNameError {
    #[error("name must not be empty")]
    Empty,

    #[error("name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("email must not be empty")]
    Empty,

    #[error("email too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("invalid email format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for credential store operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("Invalid name: {0}")]
    InvalidName(#[from] UserNameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("User not found: {0}")]
    NotFound(UserId),

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
