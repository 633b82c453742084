use super::valuation_model::PortfolioSnapshot;
use crate::Result;

/// Trait defining the contract for the valuation service.
pub trait ValuationServiceTrait: Send + Sync {
    /// Recomputes a priced snapshot from the ledger's current state.
    fn get_snapshot(&self) -> Result<PortfolioSnapshot>;
}
