//! Near-term cash-flow forecasting from recurring scheduled transactions

use std::collections::HashSet;

use chrono::NaiveDate;
use log::debug;

use crate::account::{Account, KnownTransaction, ScheduledTransaction};
use crate::rates::advance_date;

use super::points::{AccountFilter, ForecastDataPoint, ForecastPeriod, FutureTransaction};

/// Cap on occurrences expanded from a single template
const MAX_OCCURRENCES: usize = 600;

/// Configuration for a forecast run
#[derive(Debug, Clone)]
pub struct ForecastConfig {
    /// First day of the horizon. Passed in rather than read from the wall
    /// clock so identical inputs produce identical output.
    pub today: NaiveDate,

    /// Horizon and bucket granularity
    pub period: ForecastPeriod,

    /// One account or the aggregate
    pub filter: AccountFilter,
}

/// Expands scheduled-transaction templates over a bounded horizon into a
/// bucketed running-balance series
pub struct CashFlowForecaster {
    config: ForecastConfig,
}

/// A synthesized occurrence within the horizon
struct Occurrence {
    date: NaiveDate,
    name: String,
    amount: f64,
}

impl CashFlowForecaster {
    pub fn new(config: ForecastConfig) -> Self {
        Self { config }
    }

    /// Build the forecast series for the filtered account set.
    ///
    /// The first point anchors the series at today's combined balance; each
    /// subsequent bucket carries its contributing transactions and the
    /// running balance after the bucket's net amount.
    pub fn forecast(
        &self,
        accounts: &[Account],
        scheduled: &[ScheduledTransaction],
        known: &[KnownTransaction],
    ) -> Vec<ForecastDataPoint> {
        let today = self.config.today;
        let period = self.config.period;
        let end = period.end_date(today);

        let selected: Vec<&Account> = accounts
            .iter()
            .filter(|a| {
                !a.is_closed
                    && a.account_type.included_in_forecast()
                    && self.config.filter.matches(a.id)
            })
            .collect();
        let starting_balance: f64 = selected.iter().map(|a| a.current_balance).sum();

        let mut occurrences = self.expand_occurrences(&selected, scheduled, known, end);
        occurrences.sort_by_key(|o| o.date);
        debug!(
            "forecast over {} accounts: {} occurrences through {}",
            selected.len(),
            occurrences.len(),
            end
        );

        // Anchor at today; it carries both display series so the chart's
        // historical and projected lines meet with no gap
        let mut points = vec![ForecastDataPoint {
            date: today,
            label: period.label(today),
            balance: starting_balance,
            transactions: Vec::new(),
            historical_balance: Some(starting_balance),
            projected_balance: Some(starting_balance),
        }];

        let mut balance = starting_balance;
        let mut idx = 0;
        let mut bucket_end = period.next_bucket(today).min(end);

        loop {
            let mut transactions = Vec::new();
            let mut net = 0.0;
            while idx < occurrences.len() && occurrences[idx].date <= bucket_end {
                let occurrence = &occurrences[idx];
                net += occurrence.amount;
                transactions.push(FutureTransaction {
                    name: occurrence.name.clone(),
                    amount: occurrence.amount,
                });
                idx += 1;
            }

            balance += net;
            points.push(ForecastDataPoint {
                date: bucket_end,
                label: period.label(bucket_end),
                balance,
                transactions,
                historical_balance: None,
                projected_balance: Some(balance),
            });

            if bucket_end >= end {
                break;
            }
            bucket_end = period.next_bucket(bucket_end).min(end);
        }

        points
    }

    /// Synthesize template occurrences within `[today, end]`, plus any known
    /// one-off future transactions on the selected accounts.
    fn expand_occurrences(
        &self,
        selected: &[&Account],
        scheduled: &[ScheduledTransaction],
        known: &[KnownTransaction],
        end: NaiveDate,
    ) -> Vec<Occurrence> {
        let ids: HashSet<u32> = selected.iter().map(|a| a.id).collect();
        let mut occurrences = Vec::new();

        for template in scheduled {
            if !ids.contains(&template.account_id) {
                continue;
            }

            let mut date = template.next_date;
            for _ in 0..MAX_OCCURRENCES {
                if date > end || template.end_date.is_some_and(|last| date > last) {
                    break;
                }
                if date >= self.config.today {
                    occurrences.push(Occurrence {
                        date,
                        name: template.name.clone(),
                        amount: template.amount,
                    });
                }
                let next = advance_date(date, template.frequency);
                if next <= date {
                    // Saturated at the calendar limit
                    break;
                }
                date = next;
            }
        }

        for tx in known {
            if ids.contains(&tx.account_id) && tx.date >= self.config.today && tx.date <= end {
                occurrences.push(Occurrence {
                    date: tx.date,
                    name: tx.name.clone(),
                    amount: tx.amount,
                });
            }
        }

        occurrences
    }
}
