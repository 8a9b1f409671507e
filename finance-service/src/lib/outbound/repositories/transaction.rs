use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::transaction::errors::TransactionError;
use crate::domain::transaction::models::Amount;
use crate::domain::transaction::models::NewTransaction;
use crate::domain::transaction::models::Transaction;
use crate::domain::transaction::models::TransactionId;
use crate::domain::transaction::ports::TransactionRepository;
use crate::domain::user::models::UserId;

pub struct PostgresTransactionRepository {
    pool: PgPool,
}

impl PostgresTransactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct TransactionRow {
    id: i64,
    user_id: i64,
    amount: f64,
    description: String,
    #[sqlx(rename = "type")]
    kind: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TransactionRow> for Transaction {
    type Error = TransactionError;

    fn try_from(row: TransactionRow) -> Result<Self, Self::Error> {
        Ok(Transaction {
            id: TransactionId(row.id),
            user_id: UserId(row.user_id),
            amount: Amount::new(row.amount)?,
            description: row.description,
            kind: row.kind.parse()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn database_error(e: sqlx::Error) -> TransactionError {
    TransactionError::DatabaseError(e.to_string())
}

#[async_trait]
impl TransactionRepository for PostgresTransactionRepository {
    async fn create(&self, transaction: NewTransaction) -> Result<Transaction, TransactionError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO transactions (user_id, amount, description, type, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(transaction.user_id.as_i64())
        .bind(transaction.amount.value())
        .bind(&transaction.description)
        .bind(transaction.kind.as_str())
        .bind(transaction.created_at)
        .bind(transaction.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(transaction.with_id(TransactionId(id)))
    }

    async fn find_by_id(
        &self,
        id: TransactionId,
    ) -> Result<Option<Transaction>, TransactionError> {
        let row = sqlx::query_as::<_, TransactionRow>(
            r#"
            SELECT id, user_id, amount, description, type, created_at, updated_at
            FROM transactions
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.map(Transaction::try_from).transpose()
    }

    async fn find_by_user(&self, user_id: UserId) -> Result<Vec<Transaction>, TransactionError> {
        let rows = sqlx::query_as::<_, TransactionRow>(
            r#"
            SELECT id, user_id, amount, description, type, created_at, updated_at
            FROM transactions
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.into_iter().map(Transaction::try_from).collect()
    }

    async fn update(&self, transaction: Transaction) -> Result<Transaction, TransactionError> {
        let result = sqlx::query(
            r#"
            UPDATE transactions
            SET amount = $2, description = $3, type = $4, updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(transaction.id.0)
        .bind(transaction.amount.value())
        .bind(&transaction.description)
        .bind(transaction.kind.as_str())
        .bind(transaction.updated_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(TransactionError::NotFound(transaction.id));
        }

        Ok(transaction)
    }

    async fn delete(&self, id: TransactionId) -> Result<(), TransactionError> {
        let result = sqlx::query(
            r#"
            DELETE FROM transactions
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(TransactionError::NotFound(id));
        }

        Ok(())
    }
}
