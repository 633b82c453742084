use rust_decimal::Decimal;

use super::valuation_model::{PortfolioSnapshot, PricedHolding};
use crate::constants::LOW_VALUE_ALERT_THRESHOLD;
use crate::holdings::Holding;
use crate::quotes::PriceTable;

/// Prices every holding against `prices` and folds the grand total.
///
/// Pure function of its inputs: the same ledger and price table always
/// produce the same snapshot. An empty ledger values at zero, which sits
/// under the alert threshold.
pub fn price_snapshot(holdings: &[Holding], prices: &PriceTable) -> PortfolioSnapshot {
    let priced: Vec<PricedHolding> = holdings
        .iter()
        .map(|holding| {
            let price = prices.price_for(&holding.symbol);
            PricedHolding {
                symbol: holding.symbol.clone(),
                quantity: holding.quantity,
                price,
                total: price * Decimal::from(holding.quantity),
            }
        })
        .collect();

    let total_value: Decimal = priced.iter().map(|p| p.total).sum();

    PortfolioSnapshot {
        low_value_alert: total_value < LOW_VALUE_ALERT_THRESHOLD,
        holdings: priced,
        total_value,
    }
}
