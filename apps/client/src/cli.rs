//! CLI for the Stockfolio server.
//!
//! Catalogue search runs locally against the static catalogue; the other
//! commands talk to the server's API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::api_client::ApiClient;
use crate::commands;

const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

#[derive(Parser)]
#[command(name = "stockfolio")]
#[command(version)]
#[command(about = "CLI client for the Stockfolio portfolio server", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the Stockfolio server (falls back to STOCKFOLIO_SERVER)
    #[arg(long, global = true)]
    pub server: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the stock catalogue
    Search {
        /// Substring to match against symbols and descriptions
        query: String,
    },

    /// Add a holding to the portfolio
    Add {
        /// Ticker symbol from the catalogue
        symbol: String,
        /// Number of shares to add
        quantity: i64,
    },

    /// Show the priced portfolio
    Portfolio,

    /// Show the transaction history
    History,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let server = self
            .server
            .or_else(|| std::env::var("STOCKFOLIO_SERVER").ok())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        let client = ApiClient::new(server);

        match self.command {
            Commands::Search { query } => commands::search(&query),
            Commands::Add { symbol, quantity } => commands::add(&client, &symbol, quantity).await,
            Commands::Portfolio => commands::portfolio(&client).await,
            Commands::History => commands::history(&client).await,
        }
    }
}
