//! Project every open debt account in the ledger
//!
//! Outputs one summary line per account plus aggregate totals

use std::path::Path;
use std::time::Instant;

use balance_engine::{DebtProjector, Ledger, ProjectorConfig};
use chrono::Local;
use rayon::prelude::*;

fn main() {
    env_logger::init();

    let start = Instant::now();
    let data_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/ledger".to_string());

    println!("Loading ledger from {data_dir}...");
    let ledger = Ledger::from_csv_path(Path::new(&data_dir)).expect("Failed to load ledger");
    println!(
        "Loaded {} accounts, {} transactions in {:?}",
        ledger.accounts.len(),
        ledger.transactions.len(),
        start.elapsed()
    );

    let projector = DebtProjector::new(ProjectorConfig::for_today(Local::now().date_naive()));
    let debts = ledger.debt_accounts();

    println!("Projecting {} debt accounts...", debts.len());
    let proj_start = Instant::now();
    let results: Vec<_> = debts
        .par_iter()
        .map(|account| projector.project(account, &ledger.transactions))
        .collect();
    println!("Projections complete in {:?}\n", proj_start.elapsed());

    println!(
        "{:>8} {:>10} {:>14} {:>14} {:>12}",
        "Account", "Buckets", "Balance", "CumInterest", "ProjStart"
    );
    println!("{}", "-".repeat(64));

    let mut total_interest = 0.0;
    let mut total_remaining = 0.0;
    for result in &results {
        let (balance, interest) = result
            .schedule
            .last()
            .map(|item| (item.balance, item.cumulative_interest))
            .unwrap_or((0.0, 0.0));
        total_interest += interest;
        total_remaining += balance;

        println!(
            "{:>8} {:>10} {:>14.2} {:>14.2} {:>12}",
            result.account_id,
            result.schedule.len(),
            balance,
            interest,
            result
                .projection_start_label
                .as_deref()
                .unwrap_or("n/a"),
        );
    }

    println!("{}", "-".repeat(64));
    println!(
        "Total remaining after projection: ${total_remaining:.2}, lifetime interest: ${total_interest:.2}"
    );
}
