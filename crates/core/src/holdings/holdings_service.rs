use std::sync::{Arc, RwLock};

use log::debug;

use super::holdings_model::Holding;
use super::holdings_traits::{HoldingsRepositoryTrait, HoldingsServiceTrait};
use crate::errors::Error;
use crate::Result;

/// In-memory holdings store. Nothing is persisted; the ledger lives for
/// the lifetime of the process.
#[derive(Default)]
pub struct InMemoryHoldingsRepository {
    holdings: RwLock<Vec<Holding>>,
}

impl InMemoryHoldingsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HoldingsRepositoryTrait for InMemoryHoldingsRepository {
    fn append(&self, holding: Holding) -> Result<()> {
        let mut holdings = self
            .holdings
            .write()
            .map_err(|e| Error::Repository(e.to_string()))?;
        holdings.push(holding);
        Ok(())
    }

    fn list(&self) -> Result<Vec<Holding>> {
        let holdings = self
            .holdings
            .read()
            .map_err(|e| Error::Repository(e.to_string()))?;
        Ok(holdings.clone())
    }
}

/// Service for the append-only holdings ledger.
pub struct HoldingsService {
    repository: Arc<dyn HoldingsRepositoryTrait>,
}

impl HoldingsService {
    pub fn new(repository: Arc<dyn HoldingsRepositoryTrait>) -> Self {
        Self { repository }
    }
}

impl HoldingsServiceTrait for HoldingsService {
    fn add_holding(&self, symbol: &str, quantity: i64) -> Result<Holding> {
        let holding = Holding::new(symbol, quantity);
        self.repository.append(holding.clone())?;
        debug!("Added holding {} x{}", holding.symbol, holding.quantity);
        Ok(holding)
    }

    fn list_holdings(&self) -> Result<Vec<Holding>> {
        self.repository.list()
    }
}
