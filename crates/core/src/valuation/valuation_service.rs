use std::sync::Arc;

use super::valuation_calculator::price_snapshot;
use super::valuation_model::PortfolioSnapshot;
use super::valuation_traits::ValuationServiceTrait;
use crate::holdings::HoldingsServiceTrait;
use crate::quotes::PriceTable;
use crate::Result;

/// Service producing priced snapshots of the holdings ledger.
pub struct ValuationService {
    holdings_service: Arc<dyn HoldingsServiceTrait>,
    price_table: PriceTable,
}

impl ValuationService {
    pub fn new(holdings_service: Arc<dyn HoldingsServiceTrait>, price_table: PriceTable) -> Self {
        Self {
            holdings_service,
            price_table,
        }
    }
}

impl ValuationServiceTrait for ValuationService {
    fn get_snapshot(&self) -> Result<PortfolioSnapshot> {
        let holdings = self.holdings_service.list_holdings()?;
        Ok(price_snapshot(&holdings, &self.price_table))
    }
}
