use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::core::cache::QuoteCache;
use crate::core::quote::{FundQuote, FundQuoteProvider};
use crate::providers::util::with_retry;

/// Quote provider backed by the Yahoo Finance quoteSummary endpoint.
pub struct YahooQuoteProvider {
    base_url: String,
    cache: Arc<QuoteCache>,
}

impl YahooQuoteProvider {
    pub fn new(base_url: &str, cache: Arc<QuoteCache>) -> Self {
        YahooQuoteProvider {
            base_url: base_url.to_string(),
            cache,
        }
    }
}

// The endpoint wraps every numeric field as {"raw": ..., "fmt": ...}

#[derive(Deserialize, Debug)]
struct QuoteSummaryResponse {
    #[serde(alias = "quoteSummary")]
    quote_summary: QuoteSummaryResult,
}

#[derive(Deserialize, Debug)]
struct QuoteSummaryResult {
    result: Option<Vec<QuoteSummaryItem>>,
}

#[derive(Deserialize, Debug)]
struct QuoteSummaryItem {
    price: Option<PriceModule>,
    #[serde(alias = "summaryDetail")]
    summary_detail: Option<SummaryDetailModule>,
    #[serde(alias = "assetProfile")]
    asset_profile: Option<AssetProfileModule>,
}

#[derive(Deserialize, Debug)]
struct PriceModule {
    #[serde(alias = "regularMarketPrice")]
    regular_market_price: Option<RawValue>,
    #[serde(alias = "longName")]
    long_name: Option<String>,
}

#[derive(Deserialize, Debug)]
struct SummaryDetailModule {
    #[serde(alias = "previousClose")]
    previous_close: Option<RawValue>,
    #[serde(alias = "dividendRate")]
    dividend_rate: Option<RawValue>,
}

#[derive(Deserialize, Debug)]
struct AssetProfileModule {
    sector: Option<String>,
}

#[derive(Deserialize, Debug)]
struct RawValue {
    raw: Option<f64>,
}

fn raw(value: &Option<RawValue>) -> Option<f64> {
    value.as_ref().and_then(|v| v.raw)
}

#[async_trait]
impl FundQuoteProvider for YahooQuoteProvider {
    #[instrument(
        name = "YahooQuoteFetch",
        skip(self),
        fields(ticker = %ticker)
    )]
    async fn fetch_quote(&self, ticker: &str) -> Result<FundQuote> {
        if let Some(cached) = self.cache.get(ticker).await {
            return Ok(cached);
        }

        let url = format!(
            "{}/v10/finance/quoteSummary/{}?modules=price,summaryDetail,assetProfile",
            self.base_url, ticker
        );
        debug!("Requesting quote data from {}", url);

        let client = reqwest::Client::builder().user_agent("fiiq/0.2").build()?;
        let response = with_retry(
            || async { client.get(&url).send().await },
            3,
            Duration::from_millis(500),
        )
        .await
        .with_context(|| format!("Failed to send quote request for ticker: {ticker}"))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for ticker: {}",
                response.status(),
                ticker
            ));
        }

        let response_text = response
            .text()
            .await
            .with_context(|| format!("Failed to get response text for ticker: {ticker}"))?;

        if response_text.trim().is_empty() {
            return Err(anyhow!("Received empty response for ticker: {}", ticker));
        }

        let data: QuoteSummaryResponse = serde_json::from_str(&response_text).with_context(|| {
            format!("Failed to parse quote response for ticker: {ticker}. Response: '{response_text}'")
        })?;

        let item = data
            .quote_summary
            .result
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("No quote data found for ticker: {}", ticker))?;

        let quote = FundQuote {
            price: item
                .price
                .as_ref()
                .and_then(|p| raw(&p.regular_market_price)),
            previous_close: item
                .summary_detail
                .as_ref()
                .and_then(|d| raw(&d.previous_close)),
            annual_dividend_rate: item
                .summary_detail
                .as_ref()
                .and_then(|d| raw(&d.dividend_rate)),
            sector: item.asset_profile.and_then(|p| p.sector),
            long_name: item.price.and_then(|p| p.long_name),
        };

        debug!("Successfully fetched quote for {}: {:?}", ticker, quote);

        self.cache.put(ticker, quote.clone()).await;

        Ok(quote)
    }
}
