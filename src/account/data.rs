//! Ledger data structures consumed read-only by the projection engines

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Classification of a ledger account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Chequing,
    Savings,
    CreditCard,
    Loan,
    Mortgage,
    LineOfCredit,
    Investment,
}

impl AccountType {
    /// Whether the account carries a debt balance that can be amortized
    pub fn is_debt(&self) -> bool {
        matches!(
            self,
            AccountType::CreditCard
                | AccountType::Loan
                | AccountType::Mortgage
                | AccountType::LineOfCredit
        )
    }

    /// Whether the account participates in cash-flow forecasting.
    /// Investment sub-accounts settle internally and would distort the
    /// aggregate running balance.
    pub fn included_in_forecast(&self) -> bool {
        !matches!(self, AccountType::Investment)
    }
}

/// Cadence of a recurring payment or scheduled transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentFrequency {
    Weekly,
    AcceleratedWeekly,
    Biweekly,
    AcceleratedBiweekly,
    SemiMonthly,
    Monthly,
    Quarterly,
    Yearly,
}

/// A ledger account
///
/// Debt accounts may store their balance with either sign convention; the
/// engines normalize via `abs` and never mutate the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique account identifier
    pub id: u32,

    /// Display name
    pub name: String,

    /// Account classification
    pub account_type: AccountType,

    /// Current balance (signed)
    pub current_balance: f64,

    /// Balance at account opening, when recorded
    pub opening_balance: Option<f64>,

    /// Annual nominal interest rate in percent (e.g. 4.0 for 4%)
    pub interest_rate: Option<f64>,

    /// Regular payment amount for debt accounts
    pub payment_amount: Option<f64>,

    /// Cadence of the regular payment
    pub payment_frequency: Option<PaymentFrequency>,

    /// Fixed-rate Canadian mortgages compound semi-annually by disclosure
    /// convention regardless of payment cadence
    pub is_canadian_mortgage: bool,

    /// Variable-rate accounts use simple rate proration even when Canadian
    pub is_variable_rate: bool,

    /// Closed accounts are excluded from projection and forecasting
    pub is_closed: bool,
}

impl Account {
    /// Create an account with no debt terms
    pub fn new(
        id: u32,
        name: impl Into<String>,
        account_type: AccountType,
        current_balance: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            account_type,
            current_balance,
            opening_balance: None,
            interest_rate: None,
            payment_amount: None,
            payment_frequency: None,
            is_canadian_mortgage: false,
            is_variable_rate: false,
            is_closed: false,
        }
    }

    /// Attach amortization terms to a debt account
    pub fn with_debt_terms(
        mut self,
        interest_rate: f64,
        payment_amount: f64,
        payment_frequency: PaymentFrequency,
    ) -> Self {
        self.interest_rate = Some(interest_rate);
        self.payment_amount = Some(payment_amount);
        self.payment_frequency = Some(payment_frequency);
        self
    }

    /// Set the recorded opening balance
    pub fn with_opening_balance(mut self, opening_balance: f64) -> Self {
        self.opening_balance = Some(opening_balance);
        self
    }

    /// Magnitude of the current balance regardless of sign convention
    pub fn abs_balance(&self) -> f64 {
        self.current_balance.abs()
    }

    pub fn is_debt(&self) -> bool {
        self.account_type.is_debt()
    }
}

/// One leg of a split parent transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionSplit {
    /// Account the leg moves money into
    pub account_id: u32,

    /// Signed amount of the leg
    pub amount: f64,
}

/// Link from a payment to the parent transaction it was split out of
///
/// A loan payment is commonly recorded as one parent transaction split into a
/// principal leg (a transfer into the debt account) and an interest leg (a
/// transfer to an expense account). The same parent may back several child
/// transactions; only its first occurrence is attributed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedTransaction {
    /// Identifier of the parent transaction
    pub parent_id: u32,

    /// The parent's split legs
    pub splits: Vec<TransactionSplit>,
}

/// A historical cash movement on one account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Account the transaction belongs to
    pub account_id: u32,

    /// Posting date
    pub date: NaiveDate,

    /// Signed amount; positive is an inflow to the account, which on a debt
    /// account is a payment
    pub amount: f64,

    /// Parent split information, when the transaction is one leg of a split
    pub linked: Option<LinkedTransaction>,
}

impl Transaction {
    /// Create a plain transaction with no split linkage
    pub fn new(account_id: u32, date: NaiveDate, amount: f64) -> Self {
        Self {
            account_id,
            date,
            amount,
            linked: None,
        }
    }

    /// Attach parent split information
    pub fn with_linked(mut self, parent_id: u32, splits: Vec<TransactionSplit>) -> Self {
        self.linked = Some(LinkedTransaction { parent_id, splits });
        self
    }
}

/// A recurring scheduled-transaction template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTransaction {
    /// Template identifier
    pub id: u32,

    /// Display name carried onto synthesized occurrences
    pub name: String,

    /// Target account
    pub account_id: u32,

    /// Signed amount of each occurrence
    pub amount: f64,

    /// Occurrence cadence
    pub frequency: PaymentFrequency,

    /// Date of the next occurrence
    pub next_date: NaiveDate,

    /// Last date an occurrence may fall on; None repeats indefinitely
    pub end_date: Option<NaiveDate>,
}

/// A one-off future transaction already known to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnownTransaction {
    pub account_id: u32,
    pub date: NaiveDate,
    pub name: String,
    pub amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debt_classification() {
        assert!(AccountType::CreditCard.is_debt());
        assert!(AccountType::Loan.is_debt());
        assert!(AccountType::Mortgage.is_debt());
        assert!(AccountType::LineOfCredit.is_debt());
        assert!(!AccountType::Chequing.is_debt());
        assert!(!AccountType::Savings.is_debt());
        assert!(!AccountType::Investment.is_debt());
    }

    #[test]
    fn test_forecast_inclusion() {
        assert!(AccountType::Chequing.included_in_forecast());
        assert!(AccountType::CreditCard.included_in_forecast());
        assert!(!AccountType::Investment.included_in_forecast());
    }

    #[test]
    fn test_enum_tokens_round_trip() {
        let ty: AccountType = serde_json::from_str("\"CREDIT_CARD\"").unwrap();
        assert_eq!(ty, AccountType::CreditCard);
        assert_eq!(serde_json::to_string(&ty).unwrap(), "\"CREDIT_CARD\"");

        let freq: PaymentFrequency = serde_json::from_str("\"ACCELERATED_BIWEEKLY\"").unwrap();
        assert_eq!(freq, PaymentFrequency::AcceleratedBiweekly);
        assert_eq!(
            serde_json::to_string(&PaymentFrequency::SemiMonthly).unwrap(),
            "\"SEMI_MONTHLY\""
        );
    }

    #[test]
    fn test_abs_balance() {
        let negative = Account::new(1, "Mortgage", AccountType::Mortgage, -250_000.0);
        let positive = Account::new(2, "Loan", AccountType::Loan, 250_000.0);
        assert_eq!(negative.abs_balance(), 250_000.0);
        assert_eq!(positive.abs_balance(), 250_000.0);
    }
}
