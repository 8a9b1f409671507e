use thiserror::Error;

use crate::domain::transaction::models::TransactionId;

/// Error type for Amount validation failures
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AmountError {
    #[error("amount must be greater than 0, got {0}")]
    NotPositive(f64),

    #[error("amount must be a finite number")]
    NotFinite,
}

/// Top-level error type for all transaction-related operations
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransactionError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] AmountError),

    #[error("transaction type must be 'income' or 'expense', got '{0}'")]
    InvalidType(String),

    #[error("Transaction not found: {0}")]
    NotFound(TransactionId),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
