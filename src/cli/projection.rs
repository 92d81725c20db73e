use super::ui;
use crate::YieldRequest;
use crate::core::catalog::FundCatalog;
use crate::core::planner;
use anyhow::{Result, ensure};
use comfy_table::Cell;

pub fn run(catalog: &FundCatalog, request: &YieldRequest, currency: &str) -> Result<()> {
    ensure!(
        request.capital >= 0.0,
        "Capital to invest must not be negative, got {}",
        request.capital
    );

    // Bad tickers and zero prices are user notices, not process failures
    let projection = match planner::project_yield(catalog, &request.ticker, request.capital) {
        Ok(projection) => projection,
        Err(e) => {
            println!("{}", ui::style_text(&e.to_string(), ui::StyleType::Error));
            return Ok(());
        }
    };

    println!(
        "Fund: {}\n",
        ui::style_text(&projection.ticker, ui::StyleType::Title)
    );
    println!(
        "With {currency} {:.2} you can buy {} quotas.\n",
        request.capital,
        ui::style_text(&format!("{:.2}", projection.units), ui::StyleType::TotalLabel)
    );

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Horizon"),
        ui::header_cell(&format!("Income ({currency})")),
    ]);

    for (horizon, income) in [
        ("1 month", projection.monthly),
        ("3 months", projection.quarterly),
        ("6 months", projection.semiannual),
        ("12 months", projection.annual),
    ] {
        table.add_row(vec![
            Cell::new(horizon),
            ui::number_cell(format!("{income:.2}")),
        ]);
    }

    println!("{table}");
    println!(
        "\nEstimated annual income ({currency}): {}",
        ui::style_text(&format!("{:.2}", projection.annual), ui::StyleType::TotalValue)
    );

    Ok(())
}
