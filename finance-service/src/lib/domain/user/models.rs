use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::user::errors::EmailError;
use crate::domain::user::errors::UserNameError;

/// Registered user.
///
/// Created once at registration; the core never updates or deletes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: UserName,
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// User awaiting its store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: UserName,
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    /// Attach the identifier assigned by the store.
    pub fn with_id(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            created_at: self.created_at,
        }
    }
}

/// Store-assigned numeric user identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

impl UserId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Display name value type
///
/// Trimmed, non-empty, at most 100 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    const MAX_LENGTH: usize = 100;

    /// Create a validated display name.
    ///
    /// # Errors
    /// * `Empty` - Name is empty after trimming
    /// * `TooLong` - Name longer than 100 characters
    pub fn new(name: String) -> Result<Self, UserNameError> {
        let name = name.trim();
        let length = name.chars().count();

        if length == 0 {
            Err(UserNameError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(UserNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser. Case is kept as
/// given; uniqueness is decided by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    const MAX_LENGTH: usize = 255;

    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `Empty` - Email is empty after trimming
    /// * `TooLong` - Email longer than 255 characters
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        let email = email.trim();
        let length = email.chars().count();

        if length == 0 {
            return Err(EmailError::Empty);
        }
        if length > Self::MAX_LENGTH {
            return Err(EmailError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        email_address::EmailAddress::from_str(email)
            .map(|_| EmailAddress(email.to_string()))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_name_trims() {
        let name = UserName::new("  Ann  ".to_string()).unwrap();
        assert_eq!(name.as_str(), "Ann");
    }

    #[test]
    fn test_user_name_empty() {
        assert_eq!(UserName::new("   ".to_string()), Err(UserNameError::Empty));
    }

    #[test]
    fn test_user_name_too_long() {
        let result = UserName::new("a".repeat(101));
        assert_eq!(
            result,
            Err(UserNameError::TooLong {
                max: 100,
                actual: 101
            })
        );
    }

    #[test]
    fn test_email_valid() {
        let email = EmailAddress::new("ann@x.com".to_string()).unwrap();
        assert_eq!(email.as_str(), "ann@x.com");
    }

    #[test]
    fn test_email_empty() {
        assert_eq!(EmailAddress::new(String::new()), Err(EmailError::Empty));
    }

    #[test]
    fn test_email_invalid_format() {
        assert!(matches!(
            EmailAddress::new("not-an-email".to_string()),
            Err(EmailError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_new_user_with_id() {
        let new_user = NewUser {
            name: UserName::new("Ann".to_string()).unwrap(),
            email: EmailAddress::new("ann@x.com".to_string()).unwrap(),
            password_hash: "$argon2id$hash".to_string(),
            created_at: Utc::now(),
        };

        let user = new_user.clone().with_id(UserId(5));
        assert_eq!(user.id, UserId(5));
        assert_eq!(user.email, new_user.email);
        assert_eq!(user.created_at, new_user.created_at);
    }
}
