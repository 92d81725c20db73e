pub mod cli;
pub mod core;
pub mod providers;

use crate::core::cache::QuoteCache;
use crate::core::catalog::{FundCatalog, FundRecord};
use crate::core::config::AppConfig;
use crate::core::quote::FundQuoteProvider;
use anyhow::{Result, bail};
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Numeric bounds and sector filter for the `screen` command. Unset
/// bounds are unbounded.
#[derive(Debug, Clone, Default)]
pub struct ScreenRequest {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_dividend: Option<f64>,
    pub max_dividend: Option<f64>,
    pub sector: Option<String>,
}

#[derive(Debug, Clone)]
pub struct InvestRequest {
    pub tickers: Vec<String>,
    pub target_income: f64,
}

#[derive(Debug, Clone)]
pub struct YieldRequest {
    pub ticker: String,
    pub capital: f64,
}

#[derive(Debug)]
pub enum AppCommand {
    Screen(ScreenRequest),
    Invest(InvestRequest),
    Yield(YieldRequest),
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("FII screener starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let catalog = load_catalog(&config).await?;
    if catalog.is_empty() {
        bail!("The fund catalog is empty; check the watchlist and data source");
    }
    info!("Catalog loaded with {} funds", catalog.len());

    match command {
        AppCommand::Screen(request) => cli::screen::run(&catalog, &request, &config.currency),
        AppCommand::Invest(request) => cli::invest::run(&catalog, &request, &config.currency),
        AppCommand::Yield(request) => cli::projection::run(&catalog, &request, &config.currency),
    }
}

/// Builds the session catalog from the configured source. A sheet source
/// takes precedence over the market API.
async fn load_catalog(config: &AppConfig) -> Result<FundCatalog> {
    if let Some(sheet) = &config.providers.sheet {
        info!("Loading catalog from sheet {}", sheet.path);
        return providers::sheet::SheetSource::new(&sheet.path, sheet.delimiter).load();
    }

    let base_url = config
        .providers
        .yahoo
        .as_ref()
        .map_or("https://query1.finance.yahoo.com", |p| &p.base_url);
    let cache = Arc::new(QuoteCache::new());
    let provider = providers::yahoo_quote::YahooQuoteProvider::new(base_url, cache);

    fetch_catalog(&provider, &config.watchlist).await
}

/// Quotes every watchlist ticker concurrently and normalizes the results
/// into records, preserving watchlist order. A ticker whose quote fetch
/// fails is skipped.
pub async fn fetch_catalog(
    provider: &(dyn FundQuoteProvider + Send + Sync),
    watchlist: &[String],
) -> Result<FundCatalog> {
    let pb = cli::ui::new_progress_bar(watchlist.len() as u64, true);
    pb.set_message("Fetching quotes...");

    let quote_futures = watchlist.iter().map(|ticker| {
        let pb_clone = pb.clone();
        async move {
            let res = provider.fetch_quote(ticker).await;
            pb_clone.inc(1);
            (ticker, res)
        }
    });

    let results = join_all(quote_futures).await;
    pb.finish_and_clear();

    let mut records = Vec::new();
    for (ticker, result) in results {
        match result {
            Ok(quote) => records.push(FundRecord::from_quote(ticker, &quote)),
            Err(e) => warn!("Skipping {ticker}: {e}"),
        }
    }

    Ok(FundCatalog::from_records(records))
}
