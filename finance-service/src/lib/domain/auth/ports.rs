use async_trait::async_trait;
use chrono::Duration;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AccessToken;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Port for authentication use cases.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Validated name, email and password
    ///
    /// # Returns
    /// Stored user with assigned id and creation time
    ///
    /// # Errors
    /// * `DuplicateEmail` - Email is already registered
    /// * `Password` - Hashing failed
    /// * `Database` - Database operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, AuthError>;

    /// Verify credentials and issue a bearer token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (indistinguishable)
    /// * `Token` - Token sealing failed
    /// * `Database` - Database operation failed
    async fn login(&self, command: LoginCommand) -> Result<AccessToken, AuthError>;

    /// Resolve a bearer token to the user it was issued for.
    ///
    /// # Errors
    /// * `InvalidToken` - Token is not authentic
    /// * `ExpiredToken` - Token is authentic but expired
    fn authenticate_token(&self, token: &str) -> Result<UserId, AuthError>;

    /// Look up the user behind an authenticated request.
    ///
    /// # Errors
    /// * `UserNotFound` - No user with this id
    /// * `Database` - Database operation failed
    async fn current_user(&self, id: UserId) -> Result<User, AuthError>;
}

/// Issue and verify opaque session tokens.
pub trait SessionTokens: Send + Sync + 'static {
    /// # Errors
    /// * `Token` - Sealing failed
    fn issue(&self, subject: UserId, validity: Duration) -> Result<String, AuthError>;

    /// # Errors
    /// * `InvalidToken` - Malformed, tampered or foreign token
    /// * `ExpiredToken` - Authentic token past its expiry
    fn verify(&self, token: &str) -> Result<UserId, AuthError>;
}

/// One-way password hashing.
pub trait PasswordHashing: Send + Sync + 'static {
    /// # Errors
    /// * `Password` - Hashing failed
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Returns `Ok(false)` on mismatch.
    ///
    /// # Errors
    /// * `Password` - Stored hash is unreadable
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}
