use thiserror::Error;

/// Error type for session token operations.
///
/// `InvalidToken` deliberately carries no detail: a malformed, truncated,
/// tampered or foreign-key token must not be told apart from the outside.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Invalid symmetric key: {0}")]
    InvalidKey(String),

    #[error("Failed to seal token: {0}")]
    EncryptionFailed(String),

    #[error("Token is invalid")]
    InvalidToken,

    #[error("Token is expired")]
    Expired,
}
