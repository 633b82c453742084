//! Wire models mirroring the server contract.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct AddStockRequest {
    pub name: String,
    pub quantity: i64,
}

#[derive(Debug, Deserialize)]
pub struct AddStockResponse {
    pub message: String,
    pub portfolio: Vec<HoldingLine>,
}

#[derive(Debug, Deserialize)]
pub struct HoldingLine {
    pub name: String,
    pub quantity: i64,
}

#[derive(Debug, Deserialize)]
pub struct PricedLine {
    pub name: String,
    pub quantity: i64,
    pub price: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioResponse {
    pub portfolio: Vec<PricedLine>,
    pub total_value: Decimal,
    pub low_value_alert: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionHistoryResponse {
    pub transaction_history: Vec<TransactionLine>,
}

#[derive(Debug, Deserialize)]
pub struct TransactionLine {
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub name: String,
    pub quantity: i64,
    pub date: DateTime<Utc>,
}
