use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::transaction::models::Transaction;
use crate::domain::transaction::models::TransactionDetails;
use crate::domain::transaction::models::TransactionKind;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_transaction(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    body: Result<Json<TransactionRequest>, JsonRejection>,
) -> Result<ApiSuccess<TransactionResponseData>, ApiError> {
    let Json(body) = body?;

    state
        .transaction_service
        .create_transaction(caller.user_id, body.try_into_details()?)
        .await
        .map_err(ApiError::from)
        .map(|ref transaction| ApiSuccess::new(StatusCode::CREATED, transaction.into()))
}

/// Request body shared by create and update (raw JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionRequest {
    amount: f64,
    #[serde(default)]
    description: String,
    #[serde(rename = "type")]
    kind: String,
}

impl TransactionRequest {
    pub(crate) fn try_into_details(self) -> Result<TransactionDetails, ApiError> {
        TransactionDetails::new(self.amount, self.description, &self.kind).map_err(ApiError::from)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionResponseData {
    pub id: i64,
    pub user_id: i64,
    pub amount: f64,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Transaction> for TransactionResponseData {
    fn from(transaction: &Transaction) -> Self {
        Self {
            id: transaction.id.0,
            user_id: transaction.user_id.as_i64(),
            amount: transaction.amount.value(),
            description: transaction.description.clone(),
            kind: transaction.kind,
            created_at: transaction.created_at,
            updated_at: transaction.updated_at,
        }
    }
}
