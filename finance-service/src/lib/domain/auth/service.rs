use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use chrono::Utc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AccessToken;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::RegisterUserCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::PasswordHashing;
use crate::domain::auth::ports::SessionTokens;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Hashed once at construction. A login for an unknown email verifies against
/// this hash and discards the outcome, so a miss costs the same Argon2 work as
/// a wrong password.
const TIMING_PLACEHOLDER_PASSWORD: &str = "timing-placeholder-password";

/// Authentication use cases: registration, login and token resolution.
pub struct AuthService<UR, ST, PH>
where
    UR: UserRepository,
    ST: SessionTokens,
    PH: PasswordHashing,
{
    repository: Arc<UR>,
    tokens: Arc<ST>,
    password_hasher: Arc<PH>,
    token_validity: Duration,
    placeholder_hash: String,
}

impl<UR, ST, PH> AuthService<UR, ST, PH>
where
    UR: UserRepository,
    ST: SessionTokens,
    PH: PasswordHashing,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store
    /// * `tokens` - Session token issuer/verifier
    /// * `password_hasher` - Password hashing implementation
    /// * `token_validity` - Lifetime of issued tokens
    ///
    /// # Errors
    /// * `Validation` - Token validity is not positive or its expiry would be unrepresentable
    /// * `Password` - The timing placeholder hash could not be computed
    pub fn new(
        repository: Arc<UR>,
        tokens: Arc<ST>,
        password_hasher: Arc<PH>,
        token_validity: Duration,
    ) -> Result<Self, AuthError> {
        if token_validity <= Duration::zero() {
            return Err(AuthError::Validation(
                "token validity must be positive".to_string(),
            ));
        }
        if Utc::now().checked_add_signed(token_validity).is_none() {
            return Err(AuthError::Validation(
                "token validity is out of range".to_string(),
            ));
        }

        let placeholder_hash = password_hasher.hash(TIMING_PLACEHOLDER_PASSWORD)?;

        Ok(Self {
            repository,
            tokens,
            password_hasher,
            token_validity,
            placeholder_hash,
        })
    }
}

#[async_trait]
impl<UR, ST, PH> AuthServicePort for AuthService<UR, ST, PH>
where
    UR: UserRepository,
    ST: SessionTokens,
    PH: PasswordHashing,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, AuthError> {
        tracing::info!(email = %command.email, "Registering user");

        let password_hash = self.password_hasher.hash(command.password.as_str())?;

        let new_user = NewUser {
            name: command.name,
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        let user = self.repository.create(new_user).await.map_err(|e| {
            let err = AuthError::from(e);
            tracing::warn!(error = %err, "Registration failed");
            err
        })?;

        tracing::info!(user_id = %user.id, email = %user.email, "User registered");

        Ok(user)
    }

    async fn login(&self, command: LoginCommand) -> Result<AccessToken, AuthError> {
        let user = match self.repository.find_by_email(command.email.trim()).await? {
            Some(user) => user,
            None => {
                let _ = self
                    .password_hasher
                    .verify(&command.password, &self.placeholder_hash);
                tracing::warn!(email = %command.email, "Login failed: unknown email");
                return Err(AuthError::InvalidCredentials);
            }
        };

        if !self
            .password_hasher
            .verify(&command.password, &user.password_hash)?
        {
            tracing::warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self
            .tokens
            .issue(user.id, self.token_validity)
            .map_err(|e| {
                tracing::error!(user_id = %user.id, error = %e, "Failed to issue token");
                e
            })?;

        tracing::info!(user_id = %user.id, "Login succeeded");

        Ok(AccessToken::bearer(token, self.token_validity))
    }

    fn authenticate_token(&self, token: &str) -> Result<UserId, AuthError> {
        self.tokens.verify(token)
    }

    async fn current_user(&self, id: UserId) -> Result<User, AuthError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AuthError::UserNotFound(id))
    }
}
