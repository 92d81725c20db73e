//! Quote abstractions over fund data sources

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Raw quote fields exactly as a data source reports them. Normalization
/// into a catalog record happens once, at load time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundQuote {
    pub price: Option<f64>,
    pub previous_close: Option<f64>,
    /// Annualized dividend rate per quota.
    pub annual_dividend_rate: Option<f64>,
    pub sector: Option<String>,
    pub long_name: Option<String>,
}

#[async_trait]
pub trait FundQuoteProvider: Send + Sync {
    async fn fetch_quote(&self, ticker: &str) -> Result<FundQuote>;
}
