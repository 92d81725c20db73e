//! Numeric range and sector filtering over a catalog

use crate::core::catalog::{FundCatalog, FundRecord};

/// Price and dividend bounds plus an optional exact sector match.
///
/// The default range is unbounded and matches every well-formed record.
#[derive(Debug, Clone)]
pub struct FilterRange {
    pub min_price: f64,
    pub max_price: f64,
    pub min_dividend: f64,
    pub max_dividend: f64,
    pub sector: Option<String>,
}

impl Default for FilterRange {
    fn default() -> Self {
        FilterRange {
            min_price: 0.0,
            max_price: f64::MAX,
            min_dividend: 0.0,
            max_dividend: f64::MAX,
            sector: None,
        }
    }
}

impl FilterRange {
    /// Returns the records whose price and monthly dividend fall inside
    /// the bounds (inclusive), in catalog order.
    ///
    /// An inverted range (min above max) is not an error here; it simply
    /// matches nothing. Callers that want to reject such ranges do so at
    /// the input boundary.
    pub fn apply<'a>(&self, catalog: &'a FundCatalog) -> Vec<&'a FundRecord> {
        catalog
            .records()
            .iter()
            .filter(|record| self.matches(record))
            .collect()
    }

    fn matches(&self, record: &FundRecord) -> bool {
        // Non-finite values cannot satisfy the bounds
        if !record.price.is_finite() || !record.monthly_dividend.is_finite() {
            return false;
        }
        if record.price < self.min_price || record.price > self.max_price {
            return false;
        }
        if record.monthly_dividend < self.min_dividend
            || record.monthly_dividend > self.max_dividend
        {
            return false;
        }
        match self.sector.as_deref() {
            Some(sector) if !sector.is_empty() => record.sector.as_deref() == Some(sector),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ticker: &str, price: f64, monthly_dividend: f64, sector: Option<&str>) -> FundRecord {
        FundRecord {
            ticker: ticker.to_string(),
            price,
            monthly_dividend,
            sector: sector.map(str::to_string),
        }
    }

    fn catalog() -> FundCatalog {
        FundCatalog::from_records(vec![
            record("A", 10.0, 0.5, Some("Logística")),
            record("B", 25.0, 1.2, Some("Shoppings")),
            record("C", 40.0, 0.9, Some("Logística")),
            record("D", 120.0, 2.5, None),
        ])
    }

    #[test]
    fn test_unbounded_range_matches_all() {
        let catalog = catalog();
        let matched = FilterRange::default().apply(&catalog);
        assert_eq!(matched.len(), 4);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let catalog = catalog();
        let range = FilterRange {
            min_price: 10.0,
            max_price: 40.0,
            min_dividend: 0.5,
            max_dividend: 0.9,
            sector: None,
        };

        let matched = range.apply(&catalog);
        let tickers: Vec<_> = matched.iter().map(|r| r.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["A", "C"]);
        for record in &matched {
            assert!(record.price >= range.min_price && record.price <= range.max_price);
            assert!(
                record.monthly_dividend >= range.min_dividend
                    && record.monthly_dividend <= range.max_dividend
            );
        }
    }

    #[test]
    fn test_preserves_catalog_order() {
        let catalog = catalog();
        let range = FilterRange {
            max_price: 50.0,
            ..FilterRange::default()
        };

        let tickers: Vec<_> = range.apply(&catalog).iter().map(|r| r.ticker.clone()).collect();
        assert_eq!(tickers, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let catalog = catalog();
        let range = FilterRange {
            min_dividend: 0.9,
            ..FilterRange::default()
        };

        let once: Vec<_> = range.apply(&catalog).into_iter().cloned().collect();
        let filtered_catalog = FundCatalog::from_records(once.clone());
        let twice: Vec<_> = range.apply(&filtered_catalog).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sector_filter_is_exact() {
        let catalog = catalog();
        let range = FilterRange {
            sector: Some("Logística".to_string()),
            ..FilterRange::default()
        };

        let tickers: Vec<_> = range.apply(&catalog).iter().map(|r| r.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["A", "C"]);
    }

    #[test]
    fn test_empty_sector_means_no_sector_filter() {
        let catalog = catalog();
        let range = FilterRange {
            sector: Some(String::new()),
            ..FilterRange::default()
        };

        assert_eq!(range.apply(&catalog).len(), 4);
    }

    #[test]
    fn test_non_finite_values_are_excluded() {
        let catalog = FundCatalog::from_records(vec![
            record("A", 10.0, 0.5, None),
            record("NAN", f64::NAN, 0.5, None),
            record("INF", 10.0, f64::INFINITY, None),
        ]);

        let tickers: Vec<_> = FilterRange::default()
            .apply(&catalog)
            .iter()
            .map(|r| r.ticker.as_str())
            .collect();
        assert_eq!(tickers, vec!["A"]);
    }

    #[test]
    fn test_inverted_range_yields_empty_set() {
        let catalog = catalog();
        let range = FilterRange {
            min_price: 50.0,
            max_price: 10.0,
            ..FilterRange::default()
        };

        assert!(range.apply(&catalog).is_empty());
    }

    #[test]
    fn test_single_record_scenario() {
        let catalog = FundCatalog::from_records(vec![record("A", 10.0, 0.5, None)]);
        let range = FilterRange {
            min_price: 5.0,
            max_price: 15.0,
            min_dividend: 0.1,
            max_dividend: 1.0,
            sector: None,
        };

        let matched = range.apply(&catalog);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].ticker, "A");
    }
}
