use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fiiq::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for fiiq::AppCommand {
    fn from(cmd: Commands) -> fiiq::AppCommand {
        match cmd {
            Commands::Screen {
                min_price,
                max_price,
                min_dividend,
                max_dividend,
                sector,
            } => fiiq::AppCommand::Screen(fiiq::ScreenRequest {
                min_price,
                max_price,
                min_dividend,
                max_dividend,
                sector,
            }),
            Commands::Invest { income, tickers } => fiiq::AppCommand::Invest(fiiq::InvestRequest {
                tickers,
                target_income: income,
            }),
            Commands::Yield { capital, ticker } => fiiq::AppCommand::Yield(fiiq::YieldRequest {
                ticker,
                capital,
            }),
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display the catalog filtered by price/dividend ranges and sector
    Screen {
        /// Lowest quota price to keep
        #[arg(long)]
        min_price: Option<f64>,
        /// Highest quota price to keep
        #[arg(long)]
        max_price: Option<f64>,
        /// Lowest monthly dividend to keep
        #[arg(long)]
        min_dividend: Option<f64>,
        /// Highest monthly dividend to keep
        #[arg(long)]
        max_dividend: Option<f64>,
        /// Keep only funds in this sector
        #[arg(long)]
        sector: Option<String>,
    },
    /// Calculate the capital required to reach a target monthly income
    Invest {
        /// Target monthly income
        #[arg(long)]
        income: f64,
        /// Fund tickers to size the investment for
        #[arg(required = true)]
        tickers: Vec<String>,
    },
    /// Project dividend income for a capital amount
    Yield {
        /// Capital to invest
        #[arg(long)]
        capital: f64,
        /// Fund ticker to project
        ticker: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => setup(),
        Some(cmd) => fiiq::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}

fn setup() -> anyhow::Result<()> {
    use anyhow::Context;

    let path = fiiq::core::config::AppConfig::default_config_path()?;

    if path.exists() {
        anyhow::bail!("Configuration file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let default_config = r#"---
watchlist:
  - "HGLG11.SA"
  - "MXRF11.SA"

providers:
  yahoo:
    base_url: "https://query1.finance.yahoo.com"
  # sheet:
  #   path: "funds.csv"
  #   delimiter: ";"

currency: "BRL"
"#;

    std::fs::write(&path, default_config)
        .with_context(|| format!("Failed to write config file to {}", path.display()))?;

    tracing::info!("Created default configuration at {}", path.display());
    Ok(())
}
