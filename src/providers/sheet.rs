use anyhow::{Context, Result, anyhow};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::core::catalog::{FundCatalog, FundRecord};

/// Loads a catalog from a spreadsheet export.
///
/// Expected headers: `CÓDIGO`, `PREÇO ATUAL`, `DIVIDENDO`, `SETOR`
/// (unaccented `CODIGO`/`PRECO ATUAL` variants are accepted). Price and
/// dividend cells are stored pre-scaled by 100 and are divided back down
/// on load. A malformed row is skipped, never aborting the load.
pub struct SheetSource {
    path: PathBuf,
    delimiter: u8,
}

impl SheetSource {
    pub fn new<P: Into<PathBuf>>(path: P, delimiter: char) -> Self {
        SheetSource {
            path: path.into(),
            delimiter: delimiter as u8,
        }
    }

    pub fn load(&self) -> Result<FundCatalog> {
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open sheet file: {}", self.path.display()))?;
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .from_reader(BufReader::new(file));

        let headers = reader
            .headers()
            .with_context(|| format!("Failed to read sheet headers: {}", self.path.display()))?
            .clone();

        let mut records = Vec::new();
        for (idx, row) in reader.records().enumerate() {
            let line = idx + 2;
            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    warn!("Skipping unreadable sheet row at line {line}: {e}");
                    continue;
                }
            };
            match parse_row(&row, &headers) {
                Ok(record) => records.push(record),
                Err(e) => warn!("Skipping malformed sheet row at line {line}: {e}"),
            }
        }

        debug!(
            "Loaded {} funds from sheet {}",
            records.len(),
            self.path.display()
        );
        Ok(FundCatalog::from_records(records))
    }
}

fn parse_row(row: &StringRecord, headers: &StringRecord) -> Result<FundRecord> {
    let ticker = field(row, headers, &["CÓDIGO", "CODIGO"])
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| anyhow!("missing ticker"))?;

    // Sheet values are stored in hundredths of a currency unit
    let price = numeric_field(row, headers, &["PREÇO ATUAL", "PRECO ATUAL"])? / 100.0;
    let monthly_dividend = numeric_field(row, headers, &["DIVIDENDO"])? / 100.0;

    let sector = field(row, headers, &["SETOR"])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    Ok(FundRecord {
        ticker: ticker.to_string(),
        price,
        monthly_dividend,
        sector,
    })
}

/// Looks a cell up by header name, trying each accepted spelling.
fn field<'a>(row: &'a StringRecord, headers: &StringRecord, names: &[&str]) -> Option<&'a str> {
    names
        .iter()
        .find_map(|name| headers.iter().position(|header| header == *name))
        .and_then(|pos| row.get(pos))
}

/// An absent or empty cell counts as 0; unparseable text marks the row
/// malformed.
fn numeric_field(row: &StringRecord, headers: &StringRecord, names: &[&str]) -> Result<f64> {
    match field(row, headers, names).map(str::trim) {
        None | Some("") => Ok(0.0),
        Some(text) => text
            .parse::<f64>()
            .map_err(|e| anyhow!("non-numeric {} value '{}': {}", names[0], text, e)),
    }
}
