//! Debt amortization projection from payment history to payoff

use std::collections::HashSet;

use chrono::NaiveDate;
use log::{debug, warn};

use crate::account::{Account, Transaction};
use crate::rates::{advance_date, month_label, periodic_rate, periods_per_year, round_cents};

use super::schedule::{
    bucket_by_month, downsample, stitch_display_series, PayoffProjection, PayoffScheduleItem,
};
use super::state::ProjectionState;

/// Remaining balance at or below this is treated as paid off
pub const BALANCE_EPSILON: f64 = 0.01;

/// Hard cap on projected periods so a never-amortizing loan cannot hang
pub const MAX_PROJECTION_STEPS: usize = 600;

/// Cap on chart points kept after monthly bucketing
pub const MAX_DISPLAY_POINTS: usize = 60;

/// Configuration for a payoff projection run
#[derive(Debug, Clone)]
pub struct ProjectorConfig {
    /// Date the projection phase starts from. Passed in rather than read from
    /// the wall clock so identical inputs produce identical output.
    pub today: NaiveDate,

    /// Maximum number of projected periods
    pub max_projection_steps: usize,

    /// Maximum number of display points after bucketing
    pub max_display_points: usize,
}

impl ProjectorConfig {
    /// Standard caps with the projection starting from `today`
    pub fn for_today(today: NaiveDate) -> Self {
        Self {
            today,
            max_projection_steps: MAX_PROJECTION_STEPS,
            max_display_points: MAX_DISPLAY_POINTS,
        }
    }
}

/// Projects one debt account's payment history forward to payoff
pub struct DebtProjector {
    config: ProjectorConfig,
}

impl DebtProjector {
    pub fn new(config: ProjectorConfig) -> Self {
        Self { config }
    }

    /// Build the payoff schedule for `account` from its transaction history.
    ///
    /// The historical phase replays recorded payments against a seeded
    /// original balance; the projection phase then iterates the account's
    /// rate/payment/frequency terms until payoff or the step cap. Missing
    /// terms are not an error: the result is simply historical-only with no
    /// `projection_start_label`.
    pub fn project(&self, account: &Account, transactions: &[Transaction]) -> PayoffProjection {
        let payments = payments_sorted(account, transactions);

        let total_principal_paid: f64 = payments.iter().map(|t| t.amount.abs()).sum();
        let calculated_original_balance = account.abs_balance() + total_principal_paid;

        // The recorded opening balance is authoritative when present;
        // otherwise the original balance is reconstructed from the current
        // balance plus payments to date.
        let seed = match account.opening_balance {
            Some(opening) if opening != 0.0 => opening.abs(),
            _ => calculated_original_balance,
        };

        let mut state = ProjectionState::new(seed, self.config.today);
        let mut items: Vec<PayoffScheduleItem> = Vec::with_capacity(payments.len());
        let mut seen_parents: HashSet<u32> = HashSet::new();

        for payment in &payments {
            let principal = payment.amount.abs();
            let interest = interest_leg(account, payment, &mut seen_parents);

            state.apply(principal, interest);
            items.push(PayoffScheduleItem {
                date: payment.date,
                label: month_label(payment.date),
                balance: state.balance,
                principal_paid: principal,
                interest_paid: interest,
                cumulative_principal: state.cumulative_principal,
                cumulative_interest: state.cumulative_interest,
                is_projected: false,
                historical_balance: None,
                projected_balance: None,
            });
        }

        self.project_forward(account, &mut state, &mut items);

        let mut schedule = downsample(bucket_by_month(items), self.config.max_display_points);
        let projection_start_label = stitch_display_series(&mut schedule);

        PayoffProjection {
            account_id: account.id,
            schedule,
            projection_start_label,
        }
    }

    /// Iterate future periods from today's balance until payoff, the step
    /// cap, or a payment that no longer covers interest (a legitimate
    /// steady-state, not an error).
    fn project_forward(
        &self,
        account: &Account,
        state: &mut ProjectionState,
        items: &mut Vec<PayoffScheduleItem>,
    ) {
        state.balance = account.abs_balance();
        if state.balance <= BALANCE_EPSILON {
            return;
        }
        let (Some(rate), Some(payment), Some(frequency)) = (
            account.interest_rate,
            account.payment_amount,
            account.payment_frequency,
        ) else {
            return;
        };
        if payment <= 0.0 {
            return;
        }

        let per_period = periodic_rate(
            rate,
            periods_per_year(frequency),
            account.is_canadian_mortgage,
            account.is_variable_rate,
        );

        for _ in 0..self.config.max_projection_steps {
            state.cursor = advance_date(state.cursor, frequency);

            let interest_charge = round_cents(state.balance * per_period);
            let principal_portion = payment - interest_charge;
            if principal_portion <= 0.0 {
                debug!(
                    "account {}: payment {:.2} does not cover interest {:.2}, stopping projection",
                    account.id, payment, interest_charge
                );
                break;
            }

            // Final step pays off exactly the remaining balance
            let principal = round_cents(principal_portion.min(state.balance));

            state.apply(principal, interest_charge);
            state.balance = round_cents(state.balance);

            items.push(PayoffScheduleItem {
                date: state.cursor,
                label: month_label(state.cursor),
                balance: state.balance,
                principal_paid: principal,
                interest_paid: interest_charge,
                cumulative_principal: state.cumulative_principal,
                cumulative_interest: state.cumulative_interest,
                is_projected: true,
                historical_balance: None,
                projected_balance: None,
            });

            if state.balance <= BALANCE_EPSILON {
                break;
            }
        }
    }
}

/// Payments into the account, oldest first. The sort is stable so equal-date
/// transactions keep their input order.
fn payments_sorted<'a>(account: &Account, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
    let mut payments: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.account_id == account.id && t.amount > 0.0)
        .collect();
    payments.sort_by_key(|t| t.date);
    payments
}

/// Interest attributed to a payment through its linked parent's splits.
///
/// The split targeting any account other than the one being projected is the
/// interest leg. Each parent transaction contributes at most once; a missing
/// or ambiguous leg attributes zero rather than failing the projection.
fn interest_leg(account: &Account, payment: &Transaction, seen: &mut HashSet<u32>) -> f64 {
    let Some(linked) = &payment.linked else {
        return 0.0;
    };
    if !seen.insert(linked.parent_id) {
        return 0.0;
    }

    let mut legs = linked
        .splits
        .iter()
        .filter(|split| split.account_id != account.id);
    match (legs.next(), legs.next()) {
        (Some(leg), None) => leg.amount.abs(),
        (Some(_), Some(_)) => {
            warn!(
                "account {}: parent transaction {} has multiple external split legs, interest not attributed",
                account.id, linked.parent_id
            );
            0.0
        }
        _ => 0.0,
    }
}
