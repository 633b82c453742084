//! Quotes module - the fixed price table.

mod quotes_model;


pub use quotes_model::PriceTable;
