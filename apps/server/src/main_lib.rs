use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use stockfolio_core::holdings::{
    HoldingsService, HoldingsServiceTrait, InMemoryHoldingsRepository,
};
use stockfolio_core::quotes::PriceTable;
use stockfolio_core::transactions::{
    InMemoryTransactionRepository, TransactionService, TransactionServiceTrait,
};
use stockfolio_core::valuation::{ValuationService, ValuationServiceTrait};

/// Process-wide state handed to request handlers.
///
/// One owner of the in-memory ledger and log per process; handlers share
/// it by reference through the router.
pub struct AppState {
    pub holdings_service: Arc<dyn HoldingsServiceTrait>,
    pub transaction_service: Arc<dyn TransactionServiceTrait>,
    pub valuation_service: Arc<dyn ValuationServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("STOCKFOLIO_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state() -> Arc<AppState> {
    let holdings_repository = Arc::new(InMemoryHoldingsRepository::new());
    let holdings_service: Arc<dyn HoldingsServiceTrait> =
        Arc::new(HoldingsService::new(holdings_repository));

    let transaction_repository = Arc::new(InMemoryTransactionRepository::new());
    let transaction_service: Arc<dyn TransactionServiceTrait> =
        Arc::new(TransactionService::new(transaction_repository));

    let valuation_service: Arc<dyn ValuationServiceTrait> = Arc::new(ValuationService::new(
        holdings_service.clone(),
        PriceTable::fixed(),
    ));

    Arc::new(AppState {
        holdings_service,
        transaction_service,
        valuation_service,
    })
}
