pub mod transaction;
pub mod user;

pub use transaction::PostgresTransactionRepository;
pub use user::PostgresUserRepository;
