use axum::extract::rejection::JsonRejection;
use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::create_transaction::TransactionRequest;
use super::create_transaction::TransactionResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::transaction::models::TransactionId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn update_transaction(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<TransactionRequest>, JsonRejection>,
) -> Result<ApiSuccess<TransactionResponseData>, ApiError> {
    let Path(id) = id?;
    let Json(body) = body?;

    state
        .transaction_service
        .update_transaction(caller.user_id, TransactionId(id), body.try_into_details()?)
        .await
        .map_err(ApiError::from)
        .map(|ref transaction| ApiSuccess::new(StatusCode::OK, transaction.into()))
}
