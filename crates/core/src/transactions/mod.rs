//! Transactions module - the append-only transaction log.

mod transactions_model;
mod transactions_service;
mod transactions_traits;


pub use transactions_model::{TransactionRecord, TransactionType};
pub use transactions_service::{InMemoryTransactionRepository, TransactionService};
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
