use async_trait::async_trait;

use crate::domain::transaction::errors::TransactionError;
use crate::domain::transaction::models::NewTransaction;
use crate::domain::transaction::models::Transaction;
use crate::domain::transaction::models::TransactionDetails;
use crate::domain::transaction::models::TransactionId;
use crate::domain::user::models::UserId;

/// Port for transaction domain service operations.
///
/// Every operation is scoped to `owner`; another user's transaction is
/// reported as `NotFound`.
#[async_trait]
pub trait TransactionServicePort: Send + Sync + 'static {
    /// Record a new transaction for `owner`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_transaction(
        &self,
        owner: UserId,
        details: TransactionDetails,
    ) -> Result<Transaction, TransactionError>;

    /// Retrieve one of `owner`'s transactions.
    ///
    /// # Errors
    /// * `NotFound` - Transaction does not exist or belongs to someone else
    /// * `DatabaseError` - Database operation failed
    async fn get_transaction(
        &self,
        owner: UserId,
        id: TransactionId,
    ) -> Result<Transaction, TransactionError>;

    /// List `owner`'s transactions, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_transactions(&self, owner: UserId) -> Result<Vec<Transaction>, TransactionError>;

    /// Replace amount, description and type of one of `owner`'s transactions.
    ///
    /// # Errors
    /// * `NotFound` - Transaction does not exist or belongs to someone else
    /// * `DatabaseError` - Database operation failed
    async fn update_transaction(
        &self,
        owner: UserId,
        id: TransactionId,
        details: TransactionDetails,
    ) -> Result<Transaction, TransactionError>;

    /// Delete one of `owner`'s transactions.
    ///
    /// # Errors
    /// * `NotFound` - Transaction does not exist or belongs to someone else
    /// * `DatabaseError` - Database operation failed
    async fn delete_transaction(
        &self,
        owner: UserId,
        id: TransactionId,
    ) -> Result<(), TransactionError>;
}

/// Repository port for transaction persistence operations.
#[async_trait]
pub trait TransactionRepository: Send + Sync + 'static {
    /// Persist a new transaction.
    ///
    /// # Returns
    /// Stored transaction with its assigned identifier
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, transaction: NewTransaction) -> Result<Transaction, TransactionError>;

    /// Retrieve transaction by identifier.
    ///
    /// # Returns
    /// Transaction if found, None otherwise
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: TransactionId)
        -> Result<Option<Transaction>, TransactionError>;

    /// Retrieve all transactions of a user, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_user(&self, user_id: UserId) -> Result<Vec<Transaction>, TransactionError>;

    /// Overwrite amount, description, type and update time.
    ///
    /// # Errors
    /// * `NotFound` - Transaction does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, transaction: Transaction) -> Result<Transaction, TransactionError>;

    /// Remove transaction permanently.
    ///
    /// # Errors
    /// * `NotFound` - Transaction does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: TransactionId) -> Result<(), TransactionError>;
}
