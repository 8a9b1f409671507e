use std::fmt;

use chrono::Duration;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::PasswordPolicyError;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UserName;

/// Plaintext password as supplied by the caller.
///
/// Never logged: `Debug` is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// # Errors
    /// * `Empty` - Password is empty
    pub fn new(password: String) -> Result<Self, PasswordPolicyError> {
        if password.is_empty() {
            return Err(PasswordPolicyError::Empty);
        }
        Ok(Self(password))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Command to register a new user with validated fields
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub name: UserName,
    pub email: EmailAddress,
    pub password: Password,
}

impl RegisterUserCommand {
    /// Validate raw registration input.
    ///
    /// # Errors
    /// * `Validation` - Name, email or password is empty, or email is malformed
    pub fn new(name: String, email: String, password: String) -> Result<Self, AuthError> {
        let name = UserName::new(name).map_err(UserError::from)?;
        let email = EmailAddress::new(email).map_err(UserError::from)?;
        let password = Password::new(password)?;

        Ok(Self {
            name,
            email,
            password,
        })
    }
}

/// Login attempt. Not validated: any malformed input simply fails to match.
#[derive(Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

impl LoginCommand {
    pub fn new(email: String, password: String) -> Self {
        Self { email, password }
    }
}

impl fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCommand")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Issued bearer credential
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
    /// Validity window in seconds
    pub expires_in: i64,
}

impl AccessToken {
    pub fn bearer(access_token: String, validity: Duration) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            expires_in: validity.num_seconds(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_command_valid() {
        let command = RegisterUserCommand::new(
            "Ann".to_string(),
            "ann@x.com".to_string(),
            "secret123".to_string(),
        )
        .unwrap();

        assert_eq!(command.name.as_str(), "Ann");
        assert_eq!(command.email.as_str(), "ann@x.com");
        assert_eq!(command.password.as_str(), "secret123");
    }

    #[test]
    fn test_register_command_rejects_empty_fields() {
        let cases = [
            ("", "ann@x.com", "secret123", "name"),
            ("Ann", "", "secret123", "email"),
            ("Ann", "ann@x.com", "", "password"),
        ];

        for (name, email, password, field) in cases {
            let result =
                RegisterUserCommand::new(name.to_string(), email.to_string(), password.to_string());
            assert!(
                matches!(&result, Err(AuthError::Validation(msg)) if msg.to_lowercase().contains(field)),
                "expected validation error on {}",
                field
            );
        }
    }

    #[test]
    fn test_password_debug_is_redacted() {
        let password = Password::new("secret123".to_string()).unwrap();
        assert!(!format!("{:?}", password).contains("secret123"));

        let login = LoginCommand::new("ann@x.com".to_string(), "secret123".to_string());
        assert!(!format!("{:?}", login).contains("secret123"));
    }

    #[test]
    fn test_bearer_access_token() {
        let token = AccessToken::bearer("mms.v1.abc".to_string(), Duration::hours(24));
        assert_eq!(token.token_type, "bearer");
        assert_eq!(token.expires_in, 86400);
    }
}
