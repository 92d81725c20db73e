//! Investment sizing calculations over a catalog snapshot

use crate::core::catalog::FundCatalog;
use thiserror::Error;

/// Per-ticker result of a required-capital calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CapitalOutcome {
    /// Capital required at the current price and yield.
    Amount(f64),
    /// The fund pays no dividend; the target income is unreachable.
    DividendIsZero,
}

#[derive(Debug, Clone)]
pub struct CapitalEntry {
    pub ticker: String,
    pub price: f64,
    pub monthly_dividend: f64,
    pub outcome: CapitalOutcome,
}

/// Batch result: one entry per resolved ticker plus the requested tickers
/// that were absent from the catalog. A bad ticker never fails the batch.
#[derive(Debug, Default)]
pub struct CapitalReport {
    pub entries: Vec<CapitalEntry>,
    pub missing: Vec<String>,
}

impl CapitalReport {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.missing.is_empty()
    }
}

/// Computes, for each requested ticker, the capital needed at the current
/// price to generate `target_monthly_income` from its monthly dividend.
/// Requested order is preserved.
pub fn required_capital(
    catalog: &FundCatalog,
    tickers: &[String],
    target_monthly_income: f64,
) -> CapitalReport {
    let mut report = CapitalReport::default();

    for ticker in tickers {
        let Some(record) = catalog.get(ticker) else {
            report.missing.push(ticker.clone());
            continue;
        };

        let outcome = if record.monthly_dividend > 0.0 {
            let required = (target_monthly_income / record.monthly_dividend) * record.price;
            CapitalOutcome::Amount(required)
        } else {
            CapitalOutcome::DividendIsZero
        };

        report.entries.push(CapitalEntry {
            ticker: record.ticker.clone(),
            price: record.price,
            monthly_dividend: record.monthly_dividend,
            outcome,
        });
    }

    report
}

#[derive(Debug, Error, PartialEq)]
pub enum PlanError {
    #[error("{0} is not in the catalog")]
    NotFound(String),
    #[error("{0} has a zero price, the number of quotas cannot be computed")]
    DivisionUndefined(String),
}

/// Projected income for a capital amount at 1/3/6/12-month horizons.
#[derive(Debug, Clone, PartialEq)]
pub struct YieldProjection {
    pub ticker: String,
    /// Quotas the capital buys at the current price, fractional.
    pub units: f64,
    pub monthly: f64,
    pub quarterly: f64,
    pub semiannual: f64,
    pub annual: f64,
}

pub fn project_yield(
    catalog: &FundCatalog,
    ticker: &str,
    capital: f64,
) -> Result<YieldProjection, PlanError> {
    let record = catalog
        .get(ticker)
        .ok_or_else(|| PlanError::NotFound(ticker.to_string()))?;

    if record.price == 0.0 {
        return Err(PlanError::DivisionUndefined(ticker.to_string()));
    }

    let units = capital / record.price;
    let monthly = units * record.monthly_dividend;

    Ok(YieldProjection {
        ticker: record.ticker.clone(),
        units,
        monthly,
        quarterly: monthly * 3.0,
        semiannual: monthly * 6.0,
        annual: monthly * 12.0,
    })
}
