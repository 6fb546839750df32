use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use vending_machine::config::Settings;
use vending_machine::models::Money;
use vending_machine::session::LineConsole;

#[derive(Parser)]
#[command(
    name = "vending",
    version,
    about = "Interactive terminal vending machine",
    long_about = "Buy snacks from a simulated vending machine. With no options the \
                  machine is stocked with five items and you start with $200.00."
)]
struct Cli {
    /// Settings file to load instead of the one in the config directory
    #[arg(short, long, env = "VENDING_MACHINE_CONFIG")]
    config: Option<PathBuf>,

    /// Starting balance, e.g. "50" or "12.50"
    #[arg(short, long, value_parser = parse_money)]
    balance: Option<Money>,
}

fn parse_money(input: &str) -> Result<Money, String> {
    let amount = Money::parse(input).map_err(|e| e.to_string())?;
    if amount.is_negative() {
        return Err("balance cannot be negative".to_string());
    }
    Ok(amount)
}

fn main() -> Result<()> {
    vending_machine::logging::init();
    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::discover()?,
    };

    if let Some(balance) = cli.balance {
        settings.starting_balance = balance;
    }

    let mut console = LineConsole::stdio();
    vending_machine::run(&settings, &mut console)?;

    Ok(())
}
