//! Scalar summary statistics shared by both projection outputs

use serde::{Deserialize, Serialize};

/// A series element that carries a running balance
pub trait BalancePoint {
    fn balance(&self) -> f64;
}

/// Display statistics reduced from a balance series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastSummary {
    /// First point's balance, 0 for an empty series
    pub starting_balance: f64,

    /// Last point's balance
    pub ending_balance: f64,

    /// Minimum balance over the series
    pub min_balance: f64,

    /// Whether the balance dips below zero anywhere in the series
    pub goes_negative: bool,
}

impl ForecastSummary {
    /// Reduce any balance-bearing series to its summary statistics
    pub fn from_points<P: BalancePoint>(points: &[P]) -> Self {
        let starting_balance = points.first().map(P::balance).unwrap_or(0.0);
        let ending_balance = points.last().map(P::balance).unwrap_or(0.0);
        let min_balance = points
            .iter()
            .map(P::balance)
            .fold(starting_balance, f64::min);

        Self {
            starting_balance,
            ending_balance,
            min_balance,
            goes_negative: min_balance < 0.0,
        }
    }
}
