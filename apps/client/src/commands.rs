//! Subcommand implementations.

use anyhow::{bail, Result};

use stockfolio_core::catalogue::StockCatalogue;

use crate::api_client::ApiClient;

/// Search the local catalogue. The catalogue is static client-side data,
/// so no server round trip is needed.
pub fn search(query: &str) -> Result<()> {
    let catalogue = StockCatalogue::default();
    let results = catalogue.search(query);
    if results.is_empty() {
        println!("No matches for '{}'.", query.trim());
        return Ok(());
    }

    for entry in results {
        println!(
            "{} - {} (${:.2})",
            entry.symbol, entry.description, entry.price
        );
    }
    Ok(())
}

/// Validate against the catalogue, then add the holding server-side.
pub async fn add(client: &ApiClient, symbol: &str, quantity: i64) -> Result<()> {
    let catalogue = StockCatalogue::default();
    let Some(entry) = catalogue.find_symbol(symbol) else {
        bail!("Invalid stock symbol: {}", symbol);
    };
    if quantity <= 0 {
        bail!("Please enter a valid quantity.");
    }

    let response = client.add_stock(&entry.symbol, quantity).await?;
    println!("{}", response.message);
    println!("Portfolio now holds {} line(s).", response.portfolio.len());
    Ok(())
}

/// Fetch and print the priced portfolio.
pub async fn portfolio(client: &ApiClient) -> Result<()> {
    let response = client.get_portfolio().await?;
    for line in &response.portfolio {
        println!(
            "{} - {} shares @ ${:.2} each (Total: ${:.2})",
            line.name, line.quantity, line.price, line.total
        );
    }
    println!("Total portfolio value: ${:.2}", response.total_value);
    if response.low_value_alert {
        println!("Low value alert: portfolio is worth less than $100.");
    }
    Ok(())
}

/// Fetch and print the transaction history, oldest first.
pub async fn history(client: &ApiClient) -> Result<()> {
    let response = client.get_transaction_history().await?;
    if response.transaction_history.is_empty() {
        println!("No transactions yet.");
        return Ok(());
    }

    for tx in &response.transaction_history {
        println!(
            "{} {} shares of {} on {}",
            tx.transaction_type,
            tx.quantity,
            tx.name,
            tx.date.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }
    Ok(())
}
