use super::ui;
use crate::ScreenRequest;
use crate::core::FilterRange;
use crate::core::catalog::FundCatalog;
use anyhow::{Result, bail};
use comfy_table::Cell;

pub fn run(catalog: &FundCatalog, request: &ScreenRequest, currency: &str) -> Result<()> {
    let range = build_range(request)?;
    let matched = range.apply(catalog);

    if matched.is_empty() {
        println!(
            "{}",
            ui::style_text("No funds match the requested ranges.", ui::StyleType::Error)
        );
        return Ok(());
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Ticker"),
        ui::header_cell(&format!("Price ({currency})")),
        ui::header_cell(&format!("Dividend/mo ({currency})")),
        ui::header_cell("Sector"),
    ]);

    for record in &matched {
        table.add_row(vec![
            Cell::new(&record.ticker),
            ui::number_cell(format!("{:.2}", record.price)),
            ui::number_cell(format!("{:.2}", record.monthly_dividend)),
            Cell::new(record.sector.as_deref().unwrap_or("-")),
        ]);
    }

    println!("{table}");
    println!(
        "\n{}",
        ui::style_text(
            &format!("{} of {} funds match", matched.len(), catalog.len()),
            ui::StyleType::Subtle
        )
    );

    Ok(())
}

/// Turns CLI options into a filter range, rejecting out-of-order bounds.
fn build_range(request: &ScreenRequest) -> Result<FilterRange> {
    let range = FilterRange {
        min_price: request.min_price.unwrap_or(0.0),
        max_price: request.max_price.unwrap_or(f64::MAX),
        min_dividend: request.min_dividend.unwrap_or(0.0),
        max_dividend: request.max_dividend.unwrap_or(f64::MAX),
        sector: request.sector.clone(),
    };

    if range.min_price > range.max_price {
        bail!(
            "Invalid price range: minimum {} is above maximum {}",
            range.min_price,
            range.max_price
        );
    }
    if range.min_dividend > range.max_dividend {
        bail!(
            "Invalid dividend range: minimum {} is above maximum {}",
            range.min_dividend,
            range.max_dividend
        );
    }

    Ok(range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::FundRecord;

    fn catalog() -> FundCatalog {
        FundCatalog::from_records(vec![
            FundRecord {
                ticker: "HGLG11".to_string(),
                price: 160.5,
                monthly_dividend: 1.1,
                sector: Some("Logística".to_string()),
            },
            FundRecord {
                ticker: "MXRF11".to_string(),
                price: 9.8,
                monthly_dividend: 0.09,
                sector: Some("Papel".to_string()),
            },
        ])
    }

    #[test]
    fn test_build_range_defaults_are_unbounded() {
        let range = build_range(&ScreenRequest::default()).unwrap();
        assert_eq!(range.min_price, 0.0);
        assert_eq!(range.max_price, f64::MAX);
        assert!(range.sector.is_none());
    }

    #[test]
    fn test_build_range_rejects_inverted_price_bounds() {
        let request = ScreenRequest {
            min_price: Some(50.0),
            max_price: Some(10.0),
            ..ScreenRequest::default()
        };

        let result = build_range(&request);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Invalid price range")
        );
    }

    #[test]
    fn test_build_range_rejects_inverted_dividend_bounds() {
        let request = ScreenRequest {
            min_dividend: Some(2.0),
            max_dividend: Some(1.0),
            ..ScreenRequest::default()
        };

        assert!(build_range(&request).is_err());
    }

    #[test]
    fn test_run_with_matches() {
        let request = ScreenRequest {
            min_price: Some(100.0),
            ..ScreenRequest::default()
        };
        assert!(run(&catalog(), &request, "BRL").is_ok());
    }

    #[test]
    fn test_run_with_empty_result_is_not_an_error() {
        let request = ScreenRequest {
            min_price: Some(1000.0),
            ..ScreenRequest::default()
        };
        assert!(run(&catalog(), &request, "BRL").is_ok());
    }
}
