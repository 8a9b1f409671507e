use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use crate::domain::transaction::models::TransactionId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_transaction(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;

    state
        .transaction_service
        .delete_transaction(caller.user_id, TransactionId(id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
