use super::holdings_model::Holding;
use crate::Result;

/// Trait defining the contract for holdings storage.
///
/// The default implementation is in-memory; a persistent backend would
/// implement the same append/list interface.
pub trait HoldingsRepositoryTrait: Send + Sync {
    /// Appends a holding to the end of the ledger.
    fn append(&self, holding: Holding) -> Result<()>;
    /// Returns every holding in insertion order.
    fn list(&self) -> Result<Vec<Holding>>;
}

/// Trait defining the contract for the holdings ledger service.
pub trait HoldingsServiceTrait: Send + Sync {
    /// Appends a new holding. The symbol is not checked against any
    /// catalogue and the quantity is not checked for positivity.
    fn add_holding(&self, symbol: &str, quantity: i64) -> Result<Holding>;
    /// Returns the current ledger, unmodified, in insertion order.
    fn list_holdings(&self) -> Result<Vec<Holding>>;
}
