//! Stock catalogue domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An entry in the static stock catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogueEntry {
    pub symbol: String,
    pub description: String,
    pub price: Decimal,
}

impl CatalogueEntry {
    pub fn new(symbol: &str, description: &str, price: Decimal) -> Self {
        Self {
            symbol: symbol.to_string(),
            description: description.to_string(),
            price,
        }
    }
}
