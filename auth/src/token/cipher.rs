use base64::engine::general_purpose::STANDARD;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chacha20poly1305::aead::Aead;
use chacha20poly1305::aead::AeadCore;
use chacha20poly1305::aead::KeyInit;
use chacha20poly1305::aead::OsRng;
use chacha20poly1305::aead::Payload;
use chacha20poly1305::XChaCha20Poly1305;
use chacha20poly1305::XNonce;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use super::errors::TokenError;
use super::payload::SessionPayload;

/// Version header prefixed to every token and bound as associated data.
const HEADER: &str = "mms.v1.";

/// Required symmetric key size in bytes.
pub const KEY_LENGTH: usize = 32;

const NONCE_LENGTH: usize = 24;
const TAG_LENGTH: usize = 16;

/// Session token sealer and opener.
///
/// Tokens are XChaCha20-Poly1305 ciphertexts of a [`SessionPayload`], so the
/// subject is unreadable without the key and any modification breaks the
/// authentication tag. A single key is active for the lifetime of the value.
///
/// Wire format: `mms.v1.` + base64url(nonce || ciphertext || tag).
#[derive(Clone)]
pub struct TokenCipher {
    cipher: XChaCha20Poly1305,
}

impl TokenCipher {
    /// Create a token cipher from raw key bytes.
    ///
    /// # Errors
    /// * `InvalidKey` - Key is not exactly 32 bytes
    pub fn new(key: &[u8]) -> Result<Self, TokenError> {
        if key.len() != KEY_LENGTH {
            return Err(TokenError::InvalidKey(format!(
                "got {} bytes, expected {}",
                key.len(),
                KEY_LENGTH
            )));
        }

        let cipher = XChaCha20Poly1305::new_from_slice(key)
            .map_err(|e| TokenError::InvalidKey(e.to_string()))?;

        Ok(Self { cipher })
    }

    /// Create a token cipher from a base64-encoded (standard alphabet) key.
    ///
    /// # Errors
    /// * `InvalidKey` - Value is not base64 or does not decode to 32 bytes
    pub fn from_base64_key(encoded: &str) -> Result<Self, TokenError> {
        let key = STANDARD
            .decode(encoded.trim())
            .map_err(|e| TokenError::InvalidKey(format!("not valid base64: {}", e)))?;

        Self::new(&key)
    }

    /// Issue a token for `subject` valid for `validity` from now.
    ///
    /// # Errors
    /// * `EncryptionFailed` - Validity is not positive, expiry is out of range, or sealing failed
    pub fn issue(&self, subject: i64, validity: Duration) -> Result<String, TokenError> {
        self.issue_at(subject, validity, Utc::now())
    }

    /// Issue a token as if the current instant were `issued_at`.
    pub fn issue_at(
        &self,
        subject: i64,
        validity: Duration,
        issued_at: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        if validity <= Duration::zero() {
            return Err(TokenError::EncryptionFailed(
                "validity must be positive".to_string(),
            ));
        }

        let payload = SessionPayload::new(subject, issued_at, validity)?;
        let plaintext = serde_json::to_vec(&payload)
            .map_err(|e| TokenError::EncryptionFailed(e.to_string()))?;

        let nonce = XChaCha20Poly1305::generate_nonce(&mut OsRng);
        let sealed = self
            .cipher
            .encrypt(
                &nonce,
                Payload {
                    msg: &plaintext,
                    aad: HEADER.as_bytes(),
                },
            )
            .map_err(|e| TokenError::EncryptionFailed(e.to_string()))?;

        let mut body = Vec::with_capacity(NONCE_LENGTH + sealed.len());
        body.extend_from_slice(&nonce);
        body.extend_from_slice(&sealed);

        Ok(format!("{}{}", HEADER, URL_SAFE_NO_PAD.encode(body)))
    }

    /// Verify a token and return its subject.
    ///
    /// # Errors
    /// * `InvalidToken` - Token is malformed, truncated, tampered or sealed under another key
    /// * `Expired` - Token is authentic but past its expiry
    pub fn verify(&self, token: &str) -> Result<i64, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token as if the current instant were `now`.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<i64, TokenError> {
        let payload = self.open(token)?;

        if payload.is_expired(now) {
            return Err(TokenError::Expired);
        }

        Ok(payload.subject)
    }

    fn open(&self, token: &str) -> Result<SessionPayload, TokenError> {
        let encoded = token
            .strip_prefix(HEADER)
            .ok_or(TokenError::InvalidToken)?;

        let body = URL_SAFE_NO_PAD
            .decode(encoded)
            .map_err(|_| TokenError::InvalidToken)?;

        if body.len() < NONCE_LENGTH + TAG_LENGTH {
            return Err(TokenError::InvalidToken);
        }

        let (nonce, sealed) = body.split_at(NONCE_LENGTH);
        let plaintext = self
            .cipher
            .decrypt(
                XNonce::from_slice(nonce),
                Payload {
                    msg: sealed,
                    aad: HEADER.as_bytes(),
                },
            )
            .map_err(|_| TokenError::InvalidToken)?;

        serde_json::from_slice(&plaintext).map_err(|_| TokenError::InvalidToken)
    }
}
