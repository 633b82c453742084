use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{AddStockRequest, AddStockResponse, PortfolioResponse},
};

/// Append a holding to the ledger and log the matching ADD transaction.
async fn add_stock(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AddStockRequest>,
) -> ApiResult<Json<AddStockResponse>> {
    let holding = state
        .holdings_service
        .add_holding(&payload.name, payload.quantity)?;
    state
        .transaction_service
        .record_add(&holding.symbol, holding.quantity, Utc::now())?;

    let portfolio = state.holdings_service.list_holdings()?;
    Ok(Json(AddStockResponse {
        message: "Stock added successfully".to_string(),
        portfolio,
    }))
}

/// Priced snapshot of the current ledger.
async fn get_portfolio(State(state): State<Arc<AppState>>) -> ApiResult<Json<PortfolioResponse>> {
    let snapshot = state
        .valuation_service
        .get_snapshot()
        .map_err(|e| ApiError::Valuation(e.to_string()))?;
    Ok(Json(PortfolioResponse::from(snapshot)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/add-stock", post(add_stock))
        .route("/portfolio", get(get_portfolio))
}
