//! Holdings ledger domain models.

use serde::{Deserialize, Serialize};

/// A single line entry in the holdings ledger.
///
/// The ledger is append-only: adding the same symbol twice yields two
/// separate line entries rather than a merged position, and entries are
/// never mutated or removed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holding {
    /// Ticker symbol, uppercase by convention. Serialized as `name` on
    /// the wire.
    #[serde(rename = "name")]
    pub symbol: String,
    /// Number of shares. Trusted as given; a missing value on the wire
    /// defaults to zero.
    #[serde(default)]
    pub quantity: i64,
}

impl Holding {
    pub fn new(symbol: impl Into<String>, quantity: i64) -> Self {
        Self {
            symbol: symbol.into(),
            quantity,
        }
    }
}
