//! Authentication utilities library
//!
//! Provides the cryptographic building blocks behind sessions:
//! - Password hashing (Argon2id)
//! - Opaque session tokens sealed with XChaCha20-Poly1305
//!
//! Services define their own authentication traits and adapt these implementations.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::TokenCipher;
//! use chrono::Duration;
//!
//! let cipher = TokenCipher::new(b"secret_key_exactly_32_bytes_long").unwrap();
//! let token = cipher.issue(42, Duration::hours(24)).unwrap();
//! assert_eq!(cipher.verify(&token).unwrap(), 42);
//! ```

pub mod password;
pub mod token;

pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::SessionPayload;
pub use token::TokenCipher;
pub use token::TokenError;
