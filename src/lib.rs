//! Balance Engine - balance-projection engine for a personal-finance ledger
//!
//! This library provides:
//! - Debt amortization projection: historical principal/interest
//!   reconstruction and forward projection to payoff
//! - Cash-flow forecasting from recurring scheduled transactions
//! - Payment-frequency date arithmetic and compounding-convention rate
//!   conversion (including the Canadian fixed-mortgage convention)
//! - Scalar series summaries shared by both projections

pub mod account;
pub mod amortization;
pub mod forecast;
pub mod ledger;
pub mod rates;
pub mod summary;

// Re-export commonly used types
pub use account::{Account, AccountType, PaymentFrequency, ScheduledTransaction, Transaction};
pub use amortization::{DebtProjector, PayoffProjection, PayoffScheduleItem, ProjectorConfig};
pub use forecast::{
    AccountFilter, CashFlowForecaster, ForecastConfig, ForecastDataPoint, ForecastPeriod,
};
pub use ledger::Ledger;
pub use summary::{BalancePoint, ForecastSummary};
