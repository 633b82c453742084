//! Fixed price table standing in for a market data provider.

use std::collections::HashMap;

use rust_decimal::Decimal;

/// Read-only mapping from ticker symbol to a non-negative price.
///
/// Symbols absent from the table price at zero rather than being rejected.
#[derive(Debug, Clone, Default)]
pub struct PriceTable {
    prices: HashMap<String, Decimal>,
}

impl PriceTable {
    pub fn new(prices: HashMap<String, Decimal>) -> Self {
        Self { prices }
    }

    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: Into<String>,
    {
        Self {
            prices: pairs
                .into_iter()
                .map(|(symbol, price)| (symbol.into(), price))
                .collect(),
        }
    }

    /// The hardcoded prices served by the demo server.
    pub fn fixed() -> Self {
        Self::from_pairs([
            ("AAPL", Decimal::from(150)),
            ("GOOGL", Decimal::from(200)),
            ("TSLA", Decimal::from(250)),
        ])
    }

    /// Price for `symbol`, or zero when the symbol is not quoted.
    pub fn price_for(&self, symbol: &str) -> Decimal {
        self.prices
            .get(symbol)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}
