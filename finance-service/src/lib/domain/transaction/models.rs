use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::transaction::errors::AmountError;
use crate::domain::transaction::errors::TransactionError;
use crate::domain::user::models::UserId;

/// Income or expense entry owned by a single user.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    pub user_id: UserId,
    pub amount: Amount,
    pub description: String,
    pub kind: TransactionKind,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Transaction awaiting its store-assigned identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub user_id: UserId,
    pub amount: Amount,
    pub description: String,
    pub kind: TransactionKind,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewTransaction {
    pub fn with_id(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            user_id: self.user_id,
            amount: self.amount,
            description: self.description,
            kind: self.kind,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Store-assigned numeric transaction identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransactionId(pub i64);

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Strictly positive, finite amount.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(f64);

impl Amount {
    /// # Errors
    /// * `NotFinite` - NaN or infinite
    /// * `NotPositive` - Zero or negative
    pub fn new(value: f64) -> Result<Self, AmountError> {
        if !value.is_finite() {
            return Err(AmountError::NotFinite);
        }
        if value <= 0.0 {
            return Err(AmountError::NotPositive(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl FromStr for TransactionKind {
    type Err = TransactionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            other => Err(TransactionError::InvalidType(other.to_string())),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated fields for creating or replacing a transaction
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDetails {
    pub amount: Amount,
    pub description: String,
    pub kind: TransactionKind,
}

impl TransactionDetails {
    /// Validate raw input.
    ///
    /// # Errors
    /// * `InvalidAmount` - Amount is not a positive finite number
    /// * `InvalidType` - Type is neither `income` nor `expense`
    pub fn new(amount: f64, description: String, kind: &str) -> Result<Self, TransactionError> {
        Ok(Self {
            amount: Amount::new(amount)?,
            description: description.trim().to_string(),
            kind: kind.parse()?,
        })
    }
}
