use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use log::debug;

use super::transactions_model::{TransactionRecord, TransactionType};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::errors::Error;
use crate::Result;

/// In-memory transaction log. Unbounded: no compaction, no retention
/// limit, lifetime = process lifetime.
#[derive(Default)]
pub struct InMemoryTransactionRepository {
    records: RwLock<Vec<TransactionRecord>>,
}

impl InMemoryTransactionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransactionRepositoryTrait for InMemoryTransactionRepository {
    fn append(&self, record: TransactionRecord) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|e| Error::Repository(e.to_string()))?;
        records.push(record);
        Ok(())
    }

    fn list(&self) -> Result<Vec<TransactionRecord>> {
        let records = self
            .records
            .read()
            .map_err(|e| Error::Repository(e.to_string()))?;
        Ok(records.clone())
    }
}

/// Service for the append-only transaction log.
pub struct TransactionService {
    repository: Arc<dyn TransactionRepositoryTrait>,
}

impl TransactionService {
    pub fn new(repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        Self { repository }
    }
}

impl TransactionServiceTrait for TransactionService {
    fn record_add(
        &self,
        symbol: &str,
        quantity: i64,
        now: DateTime<Utc>,
    ) -> Result<TransactionRecord> {
        let record = TransactionRecord {
            transaction_type: TransactionType::Add,
            symbol: symbol.to_string(),
            quantity,
            timestamp: now,
        };
        self.repository.append(record.clone())?;
        debug!("Recorded ADD {} x{}", record.symbol, record.quantity);
        Ok(record)
    }

    fn list_transactions(&self) -> Result<Vec<TransactionRecord>> {
        self.repository.list()
    }
}
