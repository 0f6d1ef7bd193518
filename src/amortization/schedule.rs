//! Payoff schedule output rows and display shaping

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::summary::{BalancePoint, ForecastSummary};

/// One month bucket of a payoff schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffScheduleItem {
    /// Date of the latest step folded into this bucket
    pub date: NaiveDate,

    /// Month bucket label, e.g. "Jun 2024"
    pub label: String,

    /// Outstanding balance after this bucket
    pub balance: f64,

    /// Principal applied within this bucket
    pub principal_paid: f64,

    /// Interest paid within this bucket
    pub interest_paid: f64,

    /// Principal applied up to and including this bucket
    pub cumulative_principal: f64,

    /// Interest paid up to and including this bucket
    pub cumulative_interest: f64,

    /// Whether any contributing step was projected rather than historical
    pub is_projected: bool,

    /// Balance repeated on the historical display series
    pub historical_balance: Option<f64>,

    /// Balance repeated on the projected display series
    pub projected_balance: Option<f64>,
}

impl BalancePoint for PayoffScheduleItem {
    fn balance(&self) -> f64 {
        self.balance
    }
}

/// Complete payoff projection for one debt account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffProjection {
    /// Account identifier
    pub account_id: u32,

    /// Bucketed, downsampled schedule: historical steps first, projected after
    pub schedule: Vec<PayoffScheduleItem>,

    /// Label of the first projected bucket; None when nothing could be
    /// projected
    pub projection_start_label: Option<String>,
}

impl PayoffProjection {
    /// Summary statistics over the schedule's balance series
    pub fn summary(&self) -> ForecastSummary {
        ForecastSummary::from_points(&self.schedule)
    }
}

/// Merge consecutive steps sharing a month label into one bucket.
///
/// Per-bucket amounts sum; balance, cumulative totals, and date keep the
/// latest contributing step. A bucket is historical only when every
/// contributing step was historical.
pub(crate) fn bucket_by_month(items: Vec<PayoffScheduleItem>) -> Vec<PayoffScheduleItem> {
    let mut buckets: Vec<PayoffScheduleItem> = Vec::with_capacity(items.len());

    for item in items {
        match buckets.last_mut() {
            Some(last) if last.label == item.label => {
                last.principal_paid += item.principal_paid;
                last.interest_paid += item.interest_paid;
                last.balance = item.balance;
                last.cumulative_principal = item.cumulative_principal;
                last.cumulative_interest = item.cumulative_interest;
                last.date = item.date;
                last.is_projected = last.is_projected || item.is_projected;
            }
            _ => buckets.push(item),
        }
    }

    buckets
}

/// Thin a long schedule for display, always retaining the final point so the
/// terminal payoff state is never lost.
pub(crate) fn downsample(
    items: Vec<PayoffScheduleItem>,
    max_points: usize,
) -> Vec<PayoffScheduleItem> {
    if max_points == 0 || items.len() <= max_points {
        return items;
    }

    let step = items.len().div_ceil(max_points);
    let last_index = items.len() - 1;

    items
        .into_iter()
        .enumerate()
        .filter(|(i, _)| i % step == 0 || *i == last_index)
        .map(|(_, item)| item)
        .collect()
}

/// Populate the historical/projected display series and return the label of
/// the first projected bucket.
///
/// The last historical bucket before the seam also receives the projected
/// balance so the two drawn series meet with no gap.
pub(crate) fn stitch_display_series(items: &mut [PayoffScheduleItem]) -> Option<String> {
    let first_projected = items.iter().position(|item| item.is_projected);

    for item in items.iter_mut() {
        if item.is_projected {
            item.projected_balance = Some(item.balance);
        } else {
            item.historical_balance = Some(item.balance);
        }
    }

    let idx = first_projected?;
    if idx > 0 {
        let seam = &mut items[idx - 1];
        seam.projected_balance = Some(seam.balance);
    }
    Some(items[idx].label.clone())
}
