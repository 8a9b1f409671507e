//! Adapters binding the `auth` crate primitives to the domain ports.

use auth::PasswordHasher;
use auth::TokenCipher;
use auth::TokenError;
use chrono::Duration;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::ports::PasswordHashing;
use crate::domain::auth::ports::SessionTokens;
use crate::domain::user::models::UserId;

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::InvalidToken => AuthError::InvalidToken,
            TokenError::Expired => AuthError::ExpiredToken,
            TokenError::InvalidKey(_) | TokenError::EncryptionFailed(_) => {
                AuthError::Token(err.to_string())
            }
        }
    }
}

impl SessionTokens for TokenCipher {
    fn issue(&self, subject: UserId, validity: Duration) -> Result<String, AuthError> {
        Ok(TokenCipher::issue(self, subject.as_i64(), validity)?)
    }

    fn verify(&self, token: &str) -> Result<UserId, AuthError> {
        TokenCipher::verify(self, token)
            .map(UserId)
            .map_err(AuthError::from)
    }
}

impl PasswordHashing for PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        PasswordHasher::hash(self, password).map_err(|e| AuthError::Password(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        PasswordHasher::verify(self, password, hash)
            .map_err(|e| AuthError::Password(e.to_string()))
    }
}
