use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::TokenError;

/// Contents sealed inside a session token.
///
/// Only the subject and the absolute expiry travel in the token. No scopes,
/// issuer, audience or token identifier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionPayload {
    /// Subject (user identifier)
    #[serde(rename = "sub")]
    pub subject: i64,

    /// Absolute expiry instant
    #[serde(rename = "exp")]
    pub expires_at: DateTime<Utc>,
}

impl SessionPayload {
    /// Create a payload that expires `validity` after `issued_at`.
    ///
    /// # Errors
    /// * `EncryptionFailed` - Expiry falls outside the representable date range
    pub fn new(
        subject: i64,
        issued_at: DateTime<Utc>,
        validity: Duration,
    ) -> Result<Self, TokenError> {
        let expires_at = issued_at.checked_add_signed(validity).ok_or_else(|| {
            TokenError::EncryptionFailed("expiry is out of range".to_string())
        })?;

        Ok(Self {
            subject,
            expires_at,
        })
    }

    /// Check if the payload is expired at `now`.
    ///
    /// The expiry instant itself is still valid.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_new_payload() {
        let issued_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let payload = SessionPayload::new(42, issued_at, Duration::hours(24)).unwrap();

        assert_eq!(payload.subject, 42);
        assert_eq!(
            payload.expires_at,
            Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_is_expired() {
        let issued_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let payload = SessionPayload::new(1, issued_at, Duration::seconds(10)).unwrap();

        assert!(!payload.is_expired(issued_at + Duration::seconds(9)));
        assert!(!payload.is_expired(issued_at + Duration::seconds(10))); // Exactly at expiry
        assert!(payload.is_expired(issued_at + Duration::seconds(11)));
    }

    #[test]
    fn test_serialized_field_names() {
        let issued_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let payload = SessionPayload::new(7, issued_at, Duration::hours(1)).unwrap();

        let value = serde_json::to_value(payload).unwrap();
        assert_eq!(value["sub"], 7);
        assert!(value["exp"].is_string());
    }

    #[test]
    fn test_expiry_out_of_range() {
        let issued_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        assert!(matches!(
            SessionPayload::new(1, issued_at, Duration::MAX),
            Err(TokenError::EncryptionFailed(_))
        ));
    }
}
