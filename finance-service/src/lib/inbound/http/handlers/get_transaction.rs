use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::create_transaction::TransactionResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::transaction::models::TransactionId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn get_transaction(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<ApiSuccess<TransactionResponseData>, ApiError> {
    let Path(id) = id?;

    state
        .transaction_service
        .get_transaction(caller.user_id, TransactionId(id))
        .await
        .map_err(ApiError::from)
        .map(|ref transaction| ApiSuccess::new(StatusCode::OK, transaction.into()))
}
