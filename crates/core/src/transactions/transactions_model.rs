//! Transaction log domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Action captured by a transaction record.
///
/// The ledger only supports adding holdings, so ADD is the only variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    #[default]
    Add,
}

/// An immutable log entry capturing an add action and when it occurred.
///
/// Records are append-only: insertion order is chronological order, and
/// no record is ever mutated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    #[serde(rename = "name")]
    pub symbol: String,
    pub quantity: i64,
    #[serde(rename = "date")]
    pub timestamp: DateTime<Utc>,
}
