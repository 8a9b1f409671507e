use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::transaction::errors::TransactionError;
use crate::domain::transaction::models::NewTransaction;
use crate::domain::transaction::models::Transaction;
use crate::domain::transaction::models::TransactionDetails;
use crate::domain::transaction::models::TransactionId;
use crate::domain::transaction::ports::TransactionRepository;
use crate::domain::transaction::ports::TransactionServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for transaction operations.
pub struct TransactionService<TR>
where
    TR: TransactionRepository,
{
    repository: Arc<TR>,
}

impl<TR> TransactionService<TR>
where
    TR: TransactionRepository,
{
    pub fn new(repository: Arc<TR>) -> Self {
        Self { repository }
    }

    async fn find_owned(
        &self,
        owner: UserId,
        id: TransactionId,
    ) -> Result<Transaction, TransactionError> {
        match self.repository.find_by_id(id).await? {
            Some(transaction) if transaction.user_id == owner => Ok(transaction),
            Some(_) => {
                tracing::warn!(
                    transaction_id = %id,
                    user_id = %owner,
                    "Access to another user's transaction"
                );
                Err(TransactionError::NotFound(id))
            }
            None => Err(TransactionError::NotFound(id)),
        }
    }
}

#[async_trait]
impl<TR> TransactionServicePort for TransactionService<TR>
where
    TR: TransactionRepository,
{
    async fn create_transaction(
        &self,
        owner: UserId,
        details: TransactionDetails,
    ) -> Result<Transaction, TransactionError> {
        let now = Utc::now();
        let transaction = self
            .repository
            .create(NewTransaction {
                user_id: owner,
                amount: details.amount,
                description: details.description,
                kind: details.kind,
                created_at: now,
                updated_at: now,
            })
            .await?;

        tracing::info!(
            transaction_id = %transaction.id,
            user_id = %owner,
            kind = %transaction.kind,
            "Transaction created"
        );

        Ok(transaction)
    }

    async fn get_transaction(
        &self,
        owner: UserId,
        id: TransactionId,
    ) -> Result<Transaction, TransactionError> {
        self.find_owned(owner, id).await
    }

    async fn list_transactions(&self, owner: UserId) -> Result<Vec<Transaction>, TransactionError> {
        self.repository.find_by_user(owner).await
    }

    async fn update_transaction(
        &self,
        owner: UserId,
        id: TransactionId,
        details: TransactionDetails,
    ) -> Result<Transaction, TransactionError> {
        let mut transaction = self.find_owned(owner, id).await?;

        transaction.amount = details.amount;
        transaction.description = details.description;
        transaction.kind = details.kind;
        transaction.updated_at = Utc::now();

        let updated = self.repository.update(transaction).await?;
        tracing::info!(transaction_id = %id, user_id = %owner, "Transaction updated");

        Ok(updated)
    }

    async fn delete_transaction(
        &self,
        owner: UserId,
        id: TransactionId,
    ) -> Result<(), TransactionError> {
        self.find_owned(owner, id).await?;
        self.repository.delete(id).await?;
        tracing::info!(transaction_id = %id, user_id = %owner, "Transaction deleted");

        Ok(())
    }
}
