use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::create_transaction::TransactionResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_transactions(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<TransactionResponseData>>, ApiError> {
    let transactions = state
        .transaction_service
        .list_transactions(caller.user_id)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        transactions.iter().map(TransactionResponseData::from).collect(),
    ))
}
