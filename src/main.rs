//! Balance Engine CLI
//!
//! Command-line interface for projecting debt payoff and near-term cash flow
//! from ledger CSV data

use std::path::PathBuf;

use anyhow::Context;
use balance_engine::{
    AccountFilter, CashFlowForecaster, DebtProjector, ForecastConfig, ForecastPeriod,
    Ledger, PayoffProjection, ProjectorConfig,
};
use chrono::Local;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "balance_engine",
    about = "Project debt payoff and near-term cash flow from ledger CSV data"
)]
struct Args {
    /// Directory containing accounts.csv, transactions.csv, scheduled.csv
    #[arg(long, default_value = "data/ledger")]
    data_dir: PathBuf,

    /// Debt account to project (defaults to the first open debt account)
    #[arg(long)]
    account: Option<u32>,

    /// Forecast horizon: week, month, 90days, 6months, year
    #[arg(long, default_value = "month")]
    period: ForecastPeriod,

    /// Emit the payoff projection as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let today = Local::now().date_naive();

    let ledger = Ledger::from_csv_path(&args.data_dir)
        .with_context(|| format!("loading ledger data from {}", args.data_dir.display()))?;

    // Currency presentation is owned here, not by the engine
    let currency = |amount: f64| format!("${amount:.2}");

    let debts = ledger.debt_accounts();
    let account = match args.account {
        Some(id) => ledger
            .account(id)
            .with_context(|| format!("no account with id {id}"))?,
        None => match debts.first() {
            Some(account) => *account,
            None => {
                println!("No open debt accounts to project.");
                return Ok(());
            }
        },
    };

    println!("Account: {} ({})", account.name, account.id);
    println!("  Current balance: {}", currency(account.current_balance));
    if let (Some(rate), Some(payment)) = (account.interest_rate, account.payment_amount) {
        println!("  Terms: {rate}% annual, {} per period", currency(payment));
    }
    println!();

    let projector = DebtProjector::new(ProjectorConfig::for_today(today));
    let projection = projector.project(account, &ledger.transactions);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&projection)?);
        return Ok(());
    }

    print_schedule(&projection, &currency);

    match &projection.projection_start_label {
        Some(label) => println!("\nProjection starts at {label}"),
        None => println!("\nCannot project payoff (missing terms or balance already cleared)"),
    }

    let payoff = projection.summary();
    println!(
        "Payoff summary: start {} / end {} / min {}",
        currency(payoff.starting_balance),
        currency(payoff.ending_balance),
        currency(payoff.min_balance),
    );

    let forecaster = CashFlowForecaster::new(ForecastConfig {
        today,
        period: args.period,
        filter: AccountFilter::All,
    });
    let forecast = forecaster.forecast(&ledger.accounts, &ledger.scheduled, &[]);
    let summary = balance_engine::ForecastSummary::from_points(&forecast);

    println!("\nCash-flow forecast ({} points):", forecast.len());
    println!(
        "  start {} / end {} / min {}{}",
        currency(summary.starting_balance),
        currency(summary.ending_balance),
        currency(summary.min_balance),
        if summary.goes_negative {
            "  (goes negative)"
        } else {
            ""
        },
    );

    Ok(())
}

/// Print the first two years of schedule buckets as an aligned table
fn print_schedule(projection: &PayoffProjection, currency: &impl Fn(f64) -> String) {
    println!(
        "{:>10} {:>14} {:>12} {:>12} {:>14} {:>14}",
        "Month", "Balance", "Principal", "Interest", "CumPrincipal", "CumInterest"
    );
    println!("{}", "-".repeat(80));

    for item in projection.schedule.iter().take(24) {
        println!(
            "{:>10} {:>14} {:>12} {:>12} {:>14} {:>14}{}",
            item.label,
            currency(item.balance),
            currency(item.principal_paid),
            currency(item.interest_paid),
            currency(item.cumulative_principal),
            currency(item.cumulative_interest),
            if item.is_projected { "  *" } else { "" },
        );
    }
    if projection.schedule.len() > 24 {
        println!("... {} more buckets", projection.schedule.len() - 24);
    }
}
