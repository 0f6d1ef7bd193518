//! Running state threaded through a payoff schedule

use chrono::NaiveDate;

/// Balance and cumulative totals carried across schedule steps
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Outstanding balance after the most recent step
    pub balance: f64,

    /// Principal applied across all steps so far
    pub cumulative_principal: f64,

    /// Interest paid across all steps so far
    pub cumulative_interest: f64,

    /// Date of the most recent projected period
    pub cursor: NaiveDate,
}

impl ProjectionState {
    /// Start from a seeded balance with the projection cursor at `cursor`
    pub fn new(balance: f64, cursor: NaiveDate) -> Self {
        Self {
            balance,
            cumulative_principal: 0.0,
            cumulative_interest: 0.0,
            cursor,
        }
    }

    /// Apply one payment. The balance is floored at zero; cumulative totals
    /// only ever grow.
    pub fn apply(&mut self, principal: f64, interest: f64) {
        self.balance = (self.balance - principal).max(0.0);
        self.cumulative_principal += principal;
        self.cumulative_interest += interest;
    }
}
