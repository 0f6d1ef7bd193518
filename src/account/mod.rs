//! Ledger accounts, transactions, and scheduled-transaction templates

mod data;
pub mod loader;

pub use data::{
    Account, AccountType, KnownTransaction, LinkedTransaction, PaymentFrequency,
    ScheduledTransaction, Transaction, TransactionSplit,
};
pub use loader::{load_accounts, load_scheduled, load_transactions, LoadError};
