//! Fund records and the per-session catalog snapshot

use crate::core::quote::FundQuote;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single fund with its dividend expressed as a per-month value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundRecord {
    pub ticker: String,
    pub price: f64,
    pub monthly_dividend: f64,
    pub sector: Option<String>,
}

impl FundRecord {
    /// Normalizes raw API quote fields into a record. A missing price
    /// falls back to the previous close, then to 0; a missing dividend
    /// rate maps to a zero monthly dividend.
    pub fn from_quote(ticker: &str, quote: &FundQuote) -> Self {
        let price = quote.price.or(quote.previous_close).unwrap_or(0.0);
        let monthly_dividend = quote
            .annual_dividend_rate
            .map_or(0.0, |rate| rate / 12.0);

        FundRecord {
            ticker: ticker.to_string(),
            price,
            monthly_dividend,
            sector: quote.sector.clone(),
        }
    }
}

/// Ordered, immutable snapshot of fund records for one session.
///
/// Built once by a loader, then shared by reference with every filter and
/// calculator pass. Lookup is by ticker; iteration preserves load order.
#[derive(Debug, Default)]
pub struct FundCatalog {
    records: Vec<FundRecord>,
    by_ticker: HashMap<String, usize>,
}

impl FundCatalog {
    pub fn from_records(records: Vec<FundRecord>) -> Self {
        let mut by_ticker = HashMap::new();
        for (i, record) in records.iter().enumerate() {
            // First occurrence wins for duplicate tickers
            by_ticker.entry(record.ticker.clone()).or_insert(i);
        }
        FundCatalog { records, by_ticker }
    }

    pub fn get(&self, ticker: &str) -> Option<&FundRecord> {
        self.by_ticker.get(ticker).map(|&i| &self.records[i])
    }

    pub fn records(&self) -> &[FundRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ticker: &str, price: f64, monthly_dividend: f64) -> FundRecord {
        FundRecord {
            ticker: ticker.to_string(),
            price,
            monthly_dividend,
            sector: None,
        }
    }

    #[test]
    fn test_from_quote_divides_annual_rate_by_twelve() {
        let quote = FundQuote {
            price: Some(10.0),
            previous_close: Some(9.8),
            annual_dividend_rate: Some(6.0),
            sector: Some("Logística".to_string()),
            long_name: None,
        };

        let record = FundRecord::from_quote("HGLG11.SA", &quote);
        assert_eq!(record.ticker, "HGLG11.SA");
        assert_eq!(record.price, 10.0);
        assert_eq!(record.monthly_dividend, 0.5);
        assert_eq!(record.sector.as_deref(), Some("Logística"));
    }

    #[test]
    fn test_from_quote_falls_back_to_previous_close() {
        let quote = FundQuote {
            previous_close: Some(9.8),
            ..FundQuote::default()
        };

        let record = FundRecord::from_quote("MXRF11.SA", &quote);
        assert_eq!(record.price, 9.8);
        assert_eq!(record.monthly_dividend, 0.0);
    }

    #[test]
    fn test_from_quote_defaults_missing_fields_to_zero() {
        let record = FundRecord::from_quote("XPML11.SA", &FundQuote::default());
        assert_eq!(record.price, 0.0);
        assert_eq!(record.monthly_dividend, 0.0);
        assert!(record.sector.is_none());
    }

    #[test]
    fn test_catalog_lookup_and_order() {
        let catalog = FundCatalog::from_records(vec![
            record("B", 20.0, 0.2),
            record("A", 10.0, 0.1),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.records()[0].ticker, "B");
        assert_eq!(catalog.records()[1].ticker, "A");
        assert_eq!(catalog.get("A").map(|r| r.price), Some(10.0));
        assert!(catalog.get("C").is_none());
    }

    #[test]
    fn test_catalog_duplicate_ticker_first_wins() {
        let catalog = FundCatalog::from_records(vec![
            record("A", 10.0, 0.1),
            record("A", 99.0, 0.9),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("A").map(|r| r.price), Some(10.0));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = FundCatalog::from_records(Vec::new());
        assert!(catalog.is_empty());
        assert!(catalog.get("A").is_none());
    }
}
