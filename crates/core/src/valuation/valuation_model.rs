//! Portfolio valuation domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A holding joined with its current price.
///
/// Derived and ephemeral: recomputed on every valuation request, never
/// stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedHolding {
    #[serde(rename = "name")]
    pub symbol: String,
    pub quantity: i64,
    pub price: Decimal,
    /// price × quantity
    pub total: Decimal,
}

/// A read-only, recomputed view of the ledger with current prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub holdings: Vec<PricedHolding>,
    pub total_value: Decimal,
    /// True when the total value sits under the fixed dollar threshold.
    pub low_value_alert: bool,
}
