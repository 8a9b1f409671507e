pub mod cipher;
pub mod errors;
pub mod payload;

pub use cipher::TokenCipher;
pub use errors::TokenError;
pub use payload::SessionPayload;
