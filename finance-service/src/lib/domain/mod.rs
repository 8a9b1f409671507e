pub mod auth;
pub mod transaction;
pub mod user;
