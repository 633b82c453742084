//! Thin HTTP client for the server API.
//!
//! Calls are fire-and-forget: no retries, no backoff, no explicit
//! timeout beyond the transport defaults.

use anyhow::{Context, Result};

use crate::models::{
    AddStockRequest, AddStockResponse, PortfolioResponse, TransactionHistoryResponse,
};

pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub async fn add_stock(&self, name: &str, quantity: i64) -> Result<AddStockResponse> {
        let url = format!("{}/api/add-stock", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&AddStockRequest {
                name: name.to_string(),
                quantity,
            })
            .send()
            .await
            .with_context(|| format!("Failed to reach server at {}", url))?
            .error_for_status()
            .context("Server rejected the add-stock request")?;
        response
            .json()
            .await
            .context("Invalid add-stock response body")
    }

    pub async fn get_portfolio(&self) -> Result<PortfolioResponse> {
        let url = format!("{}/api/portfolio", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to reach server at {}", url))?
            .error_for_status()
            .context("Server failed to price the portfolio")?;
        response
            .json()
            .await
            .context("Invalid portfolio response body")
    }

    pub async fn get_transaction_history(&self) -> Result<TransactionHistoryResponse> {
        let url = format!("{}/api/transaction-history", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to reach server at {}", url))?
            .error_for_status()
            .context("Server failed to list transactions")?;
        response
            .json()
            .await
            .context("Invalid transaction-history response body")
    }
}

#[cfg(test)]
mod tests {
    use super::ApiClient;

    #[test]
    fn base_url_is_normalized() {
        let client = ApiClient::new(" http://localhost:5000/ ");
        assert_eq!(client.base_url, "http://localhost:5000");
    }
}
