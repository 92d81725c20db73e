//! Session-scoped quote cache shared between provider calls

use crate::core::quote::FundQuote;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// In-memory ticker-to-quote cache. One instance lives for the duration
/// of a run so repeated lookups of the same ticker hit the network once.
#[derive(Clone, Default)]
pub struct QuoteCache {
    inner: Arc<Mutex<HashMap<String, FundQuote>>>,
}

impl QuoteCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, ticker: &str) -> Option<FundQuote> {
        let cache = self.inner.lock().await;
        let quote = cache.get(ticker).cloned();
        if quote.is_some() {
            debug!("Quote cache HIT for {ticker}");
        } else {
            debug!("Quote cache MISS for {ticker}");
        }
        quote
    }

    pub async fn put(&self, ticker: &str, quote: FundQuote) {
        let mut cache = self.inner.lock().await;
        debug!("Quote cache PUT for {ticker}");
        cache.insert(ticker.to_string(), quote);
    }
}
