//! Catalogue module - the static stock catalogue and its search.

mod catalogue_model;
mod catalogue_service;


pub use catalogue_model::CatalogueEntry;
pub use catalogue_service::StockCatalogue;
