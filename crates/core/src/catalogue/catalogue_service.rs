use rust_decimal::Decimal;

use super::catalogue_model::CatalogueEntry;
use crate::constants::MIN_SEARCH_QUERY_LEN;

/// Static catalogue of searchable stocks.
pub struct StockCatalogue {
    entries: Vec<CatalogueEntry>,
}

impl StockCatalogue {
    pub fn new(entries: Vec<CatalogueEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogueEntry] {
        &self.entries
    }

    /// Looks up an entry by exact symbol, case-insensitive.
    pub fn find_symbol(&self, symbol: &str) -> Option<&CatalogueEntry> {
        self.entries
            .iter()
            .find(|entry| entry.symbol.eq_ignore_ascii_case(symbol))
    }

    /// Case-insensitive substring search over symbol and description.
    ///
    /// Queries shorter than two characters after trimming return nothing.
    /// A plain scan: no ranking, no fuzzy matching.
    pub fn search(&self, query: &str) -> Vec<&CatalogueEntry> {
        let query = query.trim().to_uppercase();
        if query.chars().count() < MIN_SEARCH_QUERY_LEN {
            return Vec::new();
        }

        self.entries
            .iter()
            .filter(|entry| {
                entry.symbol.to_uppercase().contains(&query)
                    || entry.description.to_uppercase().contains(&query)
            })
            .collect()
    }
}

impl Default for StockCatalogue {
    /// The mock catalogue shipped with the demo client.
    fn default() -> Self {
        Self::new(vec![
            CatalogueEntry::new("AAPL", "Apple Inc.", Decimal::from(150)),
            CatalogueEntry::new("GOOGL", "Alphabet Inc.", Decimal::from(2800)),
            CatalogueEntry::new("AMZN", "Amazon.com Inc.", Decimal::from(3500)),
            CatalogueEntry::new("MSFT", "Microsoft Corporation", Decimal::from(300)),
            CatalogueEntry::new("TSLA", "Tesla Inc.", Decimal::from(700)),
        ])
    }
}
