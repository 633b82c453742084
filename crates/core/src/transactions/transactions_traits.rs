use chrono::{DateTime, Utc};

use super::transactions_model::TransactionRecord;
use crate::Result;

/// Trait defining the contract for transaction log storage.
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Appends a record to the end of the log.
    fn append(&self, record: TransactionRecord) -> Result<()>;
    /// Returns every record in insertion order.
    fn list(&self) -> Result<Vec<TransactionRecord>>;
}

/// Trait defining the contract for the transaction log service.
pub trait TransactionServiceTrait: Send + Sync {
    /// Appends an ADD record stamped with the supplied timestamp. The
    /// service never reads the clock itself.
    fn record_add(
        &self,
        symbol: &str,
        quantity: i64,
        now: DateTime<Utc>,
    ) -> Result<TransactionRecord>;
    /// Returns the log, unmodified, in insertion order.
    fn list_transactions(&self) -> Result<Vec<TransactionRecord>>;
}
