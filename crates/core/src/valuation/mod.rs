//! Valuation module - the pure snapshot calculator and its service.

mod valuation_calculator;
mod valuation_model;
mod valuation_service;
mod valuation_traits;

#[cfg(test)]
mod valuation_calculator_tests;

pub use valuation_calculator::price_snapshot;
pub use valuation_model::{PortfolioSnapshot, PricedHolding};
pub use valuation_service::ValuationService;
pub use valuation_traits::ValuationServiceTrait;
