use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::{error::ApiResult, main_lib::AppState, models::TransactionHistoryResponse};

/// Full transaction log, oldest first.
async fn get_transaction_history(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<TransactionHistoryResponse>> {
    let transaction_history = state.transaction_service.list_transactions()?;
    Ok(Json(TransactionHistoryResponse {
        transaction_history,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/transaction-history", get(get_transaction_history))
}
