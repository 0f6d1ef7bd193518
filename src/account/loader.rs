//! Load ledger data from CSV files

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use super::data::{
    Account, AccountType, PaymentFrequency, ScheduledTransaction, Transaction, TransactionSplit,
};

pub const ACCOUNTS_FILE: &str = "accounts.csv";
pub const TRANSACTIONS_FILE: &str = "transactions.csv";
pub const SCHEDULED_FILE: &str = "scheduled.csv";

/// Errors raised while loading ledger CSV data
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("unknown {field} value: {value}")]
    Parse { field: &'static str, value: String },
}

/// Raw CSV row matching accounts.csv columns
#[derive(Debug, Deserialize)]
struct AccountRow {
    #[serde(rename = "AccountID")]
    id: u32,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Type")]
    account_type: String,
    #[serde(rename = "CurrentBalance")]
    current_balance: f64,
    #[serde(rename = "OpeningBalance")]
    opening_balance: Option<f64>,
    #[serde(rename = "InterestRate")]
    interest_rate: Option<f64>,
    #[serde(rename = "PaymentAmount")]
    payment_amount: Option<f64>,
    #[serde(rename = "PaymentFrequency")]
    payment_frequency: Option<String>,
    #[serde(rename = "IsCanadianMortgage")]
    is_canadian_mortgage: bool,
    #[serde(rename = "IsVariableRate")]
    is_variable_rate: bool,
    #[serde(rename = "IsClosed")]
    is_closed: bool,
}

impl AccountRow {
    fn into_account(self) -> Result<Account, LoadError> {
        let account_type = parse_account_type(&self.account_type)?;
        let payment_frequency = self
            .payment_frequency
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(parse_frequency)
            .transpose()?;

        Ok(Account {
            id: self.id,
            name: self.name,
            account_type,
            current_balance: self.current_balance,
            opening_balance: self.opening_balance,
            interest_rate: self.interest_rate,
            payment_amount: self.payment_amount,
            payment_frequency,
            is_canadian_mortgage: self.is_canadian_mortgage,
            is_variable_rate: self.is_variable_rate,
            is_closed: self.is_closed,
        })
    }
}

/// Raw CSV row matching transactions.csv columns.
///
/// Split parents are flattened into optional columns: when `ParentID` is
/// present the row is one leg of a split, and the interest leg (if recorded)
/// is carried as `InterestAccountID`/`InterestAmount`.
#[derive(Debug, Deserialize)]
struct TransactionRow {
    #[serde(rename = "AccountID")]
    account_id: u32,
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[serde(rename = "Amount")]
    amount: f64,
    #[serde(rename = "ParentID")]
    parent_id: Option<u32>,
    #[serde(rename = "InterestAccountID")]
    interest_account_id: Option<u32>,
    #[serde(rename = "InterestAmount")]
    interest_amount: Option<f64>,
}

impl TransactionRow {
    fn into_transaction(self) -> Transaction {
        let transaction = Transaction::new(self.account_id, self.date, self.amount);
        match self.parent_id {
            Some(parent_id) => {
                let mut splits = vec![TransactionSplit {
                    account_id: self.account_id,
                    amount: self.amount,
                }];
                if let (Some(account_id), Some(amount)) =
                    (self.interest_account_id, self.interest_amount)
                {
                    splits.push(TransactionSplit { account_id, amount });
                }
                transaction.with_linked(parent_id, splits)
            }
            None => transaction,
        }
    }
}

/// Raw CSV row matching scheduled.csv columns
#[derive(Debug, Deserialize)]
struct ScheduledRow {
    #[serde(rename = "ID")]
    id: u32,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "AccountID")]
    account_id: u32,
    #[serde(rename = "Amount")]
    amount: f64,
    #[serde(rename = "Frequency")]
    frequency: String,
    #[serde(rename = "NextDate")]
    next_date: NaiveDate,
    #[serde(rename = "EndDate")]
    end_date: Option<NaiveDate>,
}

impl ScheduledRow {
    fn into_scheduled(self) -> Result<ScheduledTransaction, LoadError> {
        Ok(ScheduledTransaction {
            id: self.id,
            name: self.name,
            account_id: self.account_id,
            amount: self.amount,
            frequency: parse_frequency(&self.frequency)?,
            next_date: self.next_date,
            end_date: self.end_date,
        })
    }
}

fn parse_account_type(value: &str) -> Result<AccountType, LoadError> {
    match value {
        "CHEQUING" => Ok(AccountType::Chequing),
        "SAVINGS" => Ok(AccountType::Savings),
        "CREDIT_CARD" => Ok(AccountType::CreditCard),
        "LOAN" => Ok(AccountType::Loan),
        "MORTGAGE" => Ok(AccountType::Mortgage),
        "LINE_OF_CREDIT" => Ok(AccountType::LineOfCredit),
        "INVESTMENT" => Ok(AccountType::Investment),
        other => Err(LoadError::Parse {
            field: "Type",
            value: other.to_string(),
        }),
    }
}

fn parse_frequency(value: &str) -> Result<PaymentFrequency, LoadError> {
    match value {
        "WEEKLY" => Ok(PaymentFrequency::Weekly),
        "ACCELERATED_WEEKLY" => Ok(PaymentFrequency::AcceleratedWeekly),
        "BIWEEKLY" => Ok(PaymentFrequency::Biweekly),
        "ACCELERATED_BIWEEKLY" => Ok(PaymentFrequency::AcceleratedBiweekly),
        "SEMI_MONTHLY" => Ok(PaymentFrequency::SemiMonthly),
        "MONTHLY" => Ok(PaymentFrequency::Monthly),
        "QUARTERLY" => Ok(PaymentFrequency::Quarterly),
        "YEARLY" => Ok(PaymentFrequency::Yearly),
        other => Err(LoadError::Parse {
            field: "Frequency",
            value: other.to_string(),
        }),
    }
}

fn read_rows<R: for<'de> Deserialize<'de>>(path: &Path) -> Result<Vec<R>, LoadError> {
    let display = path.display().to_string();
    let mut reader = csv::Reader::from_path(path).map_err(|source| LoadError::Csv {
        path: display.clone(),
        source,
    })?;

    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row.map_err(|source| LoadError::Csv {
            path: display.clone(),
            source,
        })?);
    }
    Ok(rows)
}

/// Load accounts from accounts.csv in `dir`
pub fn load_accounts(dir: &Path) -> Result<Vec<Account>, LoadError> {
    read_rows::<AccountRow>(&dir.join(ACCOUNTS_FILE))?
        .into_iter()
        .map(AccountRow::into_account)
        .collect()
}

/// Load transactions from transactions.csv in `dir`
pub fn load_transactions(dir: &Path) -> Result<Vec<Transaction>, LoadError> {
    Ok(read_rows::<TransactionRow>(&dir.join(TRANSACTIONS_FILE))?
        .into_iter()
        .map(TransactionRow::into_transaction)
        .collect())
}

/// Load scheduled-transaction templates from scheduled.csv in `dir`
pub fn load_scheduled(dir: &Path) -> Result<Vec<ScheduledTransaction>, LoadError> {
    read_rows::<ScheduledRow>(&dir.join(SCHEDULED_FILE))?
        .into_iter()
        .map(ScheduledRow::into_scheduled)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_account_type_tokens() {
        assert_eq!(parse_account_type("MORTGAGE").unwrap(), AccountType::Mortgage);
        assert_eq!(
            parse_account_type("LINE_OF_CREDIT").unwrap(),
            AccountType::LineOfCredit
        );
        assert!(parse_account_type("PENSION").is_err());
    }

    #[test]
    fn test_parse_frequency_tokens() {
        assert_eq!(
            parse_frequency("ACCELERATED_BIWEEKLY").unwrap(),
            PaymentFrequency::AcceleratedBiweekly
        );
        assert!(parse_frequency("DAILY").is_err());
    }

    #[test]
    fn test_account_row_conversion() {
        let row = AccountRow {
            id: 1,
            name: "Home".to_string(),
            account_type: "MORTGAGE".to_string(),
            current_balance: -200_000.0,
            opening_balance: Some(-300_000.0),
            interest_rate: Some(4.0),
            payment_amount: Some(1_500.0),
            payment_frequency: Some("MONTHLY".to_string()),
            is_canadian_mortgage: true,
            is_variable_rate: false,
            is_closed: false,
        };

        let account = row.into_account().unwrap();
        assert_eq!(account.account_type, AccountType::Mortgage);
        assert_eq!(account.payment_frequency, Some(PaymentFrequency::Monthly));
        assert!(account.is_canadian_mortgage);
    }

    #[test]
    fn test_transaction_row_builds_split_legs() {
        let row = TransactionRow {
            account_id: 1,
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            amount: 838.82,
            parent_id: Some(500),
            interest_account_id: Some(42),
            interest_amount: Some(661.18),
        };

        let transaction = row.into_transaction();
        let linked = transaction.linked.unwrap();
        assert_eq!(linked.parent_id, 500);
        assert_eq!(linked.splits.len(), 2);
        assert_eq!(linked.splits[1].account_id, 42);
    }

    #[test]
    fn test_plain_transaction_row_has_no_linkage() {
        let row = TransactionRow {
            account_id: 1,
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            amount: -55.25,
            parent_id: None,
            interest_account_id: None,
            interest_amount: None,
        };

        assert!(row.into_transaction().linked.is_none());
    }
}
