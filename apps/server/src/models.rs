//! Wire models for the HTTP API.
//!
//! Field names follow the wire contract (`name`, `totalValue`,
//! `lowValueAlert`, `transactionHistory`), so the core models, which
//! already rename for the wire, are embedded directly.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockfolio_core::holdings::Holding;
use stockfolio_core::transactions::TransactionRecord;
use stockfolio_core::valuation::{PortfolioSnapshot, PricedHolding};

/// Body of `POST /api/add-stock`.
///
/// Both fields default when absent: the endpoint accepts anything and
/// always answers 200, degenerate records included.
#[derive(Debug, Deserialize)]
pub struct AddStockRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: i64,
}

#[derive(Debug, Serialize)]
pub struct AddStockResponse {
    pub message: String,
    pub portfolio: Vec<Holding>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioResponse {
    pub portfolio: Vec<PricedHolding>,
    pub total_value: Decimal,
    pub low_value_alert: bool,
}

impl From<PortfolioSnapshot> for PortfolioResponse {
    fn from(snapshot: PortfolioSnapshot) -> Self {
        Self {
            portfolio: snapshot.holdings,
            total_value: snapshot.total_value,
            low_value_alert: snapshot.low_value_alert,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionHistoryResponse {
    pub transaction_history: Vec<TransactionRecord>,
}
