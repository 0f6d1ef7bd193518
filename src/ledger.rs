//! Pre-loaded ledger inputs for the projection engines
//!
//! Loads accounts, transactions, and scheduled transactions once, then allows
//! running many projections without re-reading CSV files.

use std::path::Path;

use crate::account::{
    load_accounts, load_scheduled, load_transactions, Account, LoadError, ScheduledTransaction,
    Transaction,
};
use crate::amortization::{DebtProjector, PayoffProjection, ProjectorConfig};

/// Accounts, transactions, and scheduled-transaction templates queried by the
/// engines. A pure container; engine output is never cached.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
    pub scheduled: Vec<ScheduledTransaction>,
}

impl Ledger {
    pub fn new(
        accounts: Vec<Account>,
        transactions: Vec<Transaction>,
        scheduled: Vec<ScheduledTransaction>,
    ) -> Self {
        Self {
            accounts,
            transactions,
            scheduled,
        }
    }

    /// Load ledger data from CSV files in a directory
    pub fn from_csv_path(dir: &Path) -> Result<Self, LoadError> {
        Ok(Self {
            accounts: load_accounts(dir)?,
            transactions: load_transactions(dir)?,
            scheduled: load_scheduled(dir)?,
        })
    }

    pub fn account(&self, id: u32) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    /// Open debt accounts eligible for payoff projection
    pub fn debt_accounts(&self) -> Vec<&Account> {
        self.accounts
            .iter()
            .filter(|a| a.is_debt() && !a.is_closed)
            .collect()
    }

    /// Transaction history for one account, in input order
    pub fn transactions_for(&self, account_id: u32) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.account_id == account_id)
            .collect()
    }

    /// Project every open debt account
    pub fn project_debts(&self, config: &ProjectorConfig) -> Vec<PayoffProjection> {
        let projector = DebtProjector::new(config.clone());
        self.debt_accounts()
            .into_iter()
            .map(|account| projector.project(account, &self.transactions))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::{AccountType, PaymentFrequency};
    use chrono::NaiveDate;

    fn ledger() -> Ledger {
        let mut closed = Account::new(3, "Old loan", AccountType::Loan, 0.0);
        closed.is_closed = true;

        Ledger::new(
            vec![
                Account::new(1, "Chequing", AccountType::Chequing, 2_000.0),
                Account::new(2, "Car loan", AccountType::Loan, -9_000.0).with_debt_terms(
                    5.0,
                    400.0,
                    PaymentFrequency::Monthly,
                ),
                closed,
            ],
            vec![Transaction::new(
                2,
                NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
                400.0,
            )],
            Vec::new(),
        )
    }

    #[test]
    fn test_debt_accounts_excludes_closed_and_asset_accounts() {
        let ledger = ledger();
        let debts = ledger.debt_accounts();
        assert_eq!(debts.len(), 1);
        assert_eq!(debts[0].id, 2);
    }

    #[test]
    fn test_transactions_for() {
        let ledger = ledger();
        assert_eq!(ledger.transactions_for(2).len(), 1);
        assert!(ledger.transactions_for(1).is_empty());
    }

    #[test]
    fn test_project_debts() {
        let ledger = ledger();
        let config = ProjectorConfig::for_today(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());

        let results = ledger.project_debts(&config);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].account_id, 2);
        assert!(results[0].projection_start_label.is_some());
    }
}
