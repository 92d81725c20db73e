use super::ui;
use crate::InvestRequest;
use crate::core::catalog::FundCatalog;
use crate::core::planner::{self, CapitalOutcome};
use anyhow::{Result, ensure};
use comfy_table::Cell;

const BAR_WIDTH: usize = 20;

pub fn run(catalog: &FundCatalog, request: &InvestRequest, currency: &str) -> Result<()> {
    ensure!(
        request.target_income >= 0.0,
        "Target monthly income must not be negative, got {}",
        request.target_income
    );

    if request.tickers.is_empty() {
        println!(
            "{}",
            ui::style_text(
                "No funds selected; nothing to calculate.",
                ui::StyleType::Error
            )
        );
        return Ok(());
    }

    let report = planner::required_capital(catalog, &request.tickers, request.target_income);

    for ticker in &report.missing {
        println!(
            "{}",
            ui::style_text(
                &format!("{ticker} is not in the catalog; skipping it."),
                ui::StyleType::Error
            )
        );
    }

    if report.entries.is_empty() {
        println!(
            "{}",
            ui::style_text(
                "No entries found for the selected funds.",
                ui::StyleType::Error
            )
        );
        return Ok(());
    }

    // Scale the bar column against the largest computable amount
    let max_amount = report
        .entries
        .iter()
        .filter_map(|entry| match entry.outcome {
            CapitalOutcome::Amount(amount) => Some(amount),
            CapitalOutcome::DividendIsZero => None,
        })
        .fold(0.0_f64, f64::max);

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Fund"),
        ui::header_cell(&format!("Price ({currency})")),
        ui::header_cell(&format!("Dividend/mo ({currency})")),
        ui::header_cell(&format!("Required Capital ({currency})")),
        ui::header_cell(""),
    ]);

    for entry in &report.entries {
        let (amount_cell, bar_cell) = match entry.outcome {
            CapitalOutcome::Amount(amount) => (
                ui::number_cell(format!("{amount:.2}")),
                Cell::new(ui::style_text(
                    &ui::ratio_bar(amount, max_amount, BAR_WIDTH),
                    ui::StyleType::Subtle,
                )),
            ),
            CapitalOutcome::DividendIsZero => {
                (ui::undefined_cell("undefined (no dividend)"), Cell::new(""))
            }
        };

        table.add_row(vec![
            Cell::new(&entry.ticker),
            ui::number_cell(format!("{:.2}", entry.price)),
            ui::number_cell(format!("{:.2}", entry.monthly_dividend)),
            amount_cell,
            bar_cell,
        ]);
    }

    println!(
        "Target monthly income ({currency}): {}\n",
        ui::style_text(
            &format!("{:.2}", request.target_income),
            ui::StyleType::TotalLabel
        )
    );
    println!("{table}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::FundRecord;

    fn catalog() -> FundCatalog {
        FundCatalog::from_records(vec![
            FundRecord {
                ticker: "A".to_string(),
                price: 10.0,
                monthly_dividend: 0.5,
                sector: None,
            },
            FundRecord {
                ticker: "B".to_string(),
                price: 30.0,
                monthly_dividend: 0.0,
                sector: None,
            },
        ])
    }

    #[test]
    fn test_run_with_mixed_outcomes() {
        let request = InvestRequest {
            tickers: vec!["A".to_string(), "B".to_string(), "Z".to_string()],
            target_income: 100.0,
        };
        assert!(run(&catalog(), &request, "BRL").is_ok());
    }

    #[test]
    fn test_run_with_empty_selection_is_a_notice() {
        let request = InvestRequest {
            tickers: Vec::new(),
            target_income: 100.0,
        };
        assert!(run(&catalog(), &request, "BRL").is_ok());
    }

    #[test]
    fn test_run_rejects_negative_income() {
        let request = InvestRequest {
            tickers: vec!["A".to_string()],
            target_income: -1.0,
        };
        assert!(run(&catalog(), &request, "BRL").is_err());
    }
}
