//! Forecast output points and horizon selection

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::rates::{day_label, month_label};
use crate::summary::BalancePoint;

/// Horizon selector for a cash-flow forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForecastPeriod {
    #[serde(rename = "week")]
    Week,
    #[serde(rename = "month")]
    Month,
    #[serde(rename = "90days")]
    NinetyDays,
    #[serde(rename = "6months")]
    SixMonths,
    #[serde(rename = "year")]
    Year,
}

impl ForecastPeriod {
    /// Last date included in the horizon
    pub fn end_date(self, today: NaiveDate) -> NaiveDate {
        match self {
            ForecastPeriod::Week => today.checked_add_days(Days::new(7)).unwrap_or(today),
            ForecastPeriod::Month => today.checked_add_months(Months::new(1)).unwrap_or(today),
            ForecastPeriod::NinetyDays => today.checked_add_days(Days::new(90)).unwrap_or(today),
            ForecastPeriod::SixMonths => today.checked_add_months(Months::new(6)).unwrap_or(today),
            ForecastPeriod::Year => today.checked_add_months(Months::new(12)).unwrap_or(today),
        }
    }

    /// End of the bucket that follows the one ending at `date`. Short
    /// horizons bucket daily, 90 days weekly, and the long horizons monthly.
    pub fn next_bucket(self, date: NaiveDate) -> NaiveDate {
        match self {
            ForecastPeriod::Week | ForecastPeriod::Month => {
                date.checked_add_days(Days::new(1)).unwrap_or(date)
            }
            ForecastPeriod::NinetyDays => date.checked_add_days(Days::new(7)).unwrap_or(date),
            ForecastPeriod::SixMonths | ForecastPeriod::Year => {
                date.checked_add_months(Months::new(1)).unwrap_or(date)
            }
        }
    }

    /// Bucket label at this horizon's granularity
    pub fn label(self, date: NaiveDate) -> String {
        match self {
            ForecastPeriod::Week | ForecastPeriod::Month | ForecastPeriod::NinetyDays => {
                day_label(date)
            }
            ForecastPeriod::SixMonths | ForecastPeriod::Year => month_label(date),
        }
    }
}

impl std::str::FromStr for ForecastPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(ForecastPeriod::Week),
            "month" => Ok(ForecastPeriod::Month),
            "90days" => Ok(ForecastPeriod::NinetyDays),
            "6months" => Ok(ForecastPeriod::SixMonths),
            "year" => Ok(ForecastPeriod::Year),
            other => Err(format!(
                "unknown forecast period '{other}' (expected week, month, 90days, 6months, or year)"
            )),
        }
    }
}

/// Which accounts contribute to the forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountFilter {
    /// Aggregate over every forecastable account
    All,
    /// One account only
    Single(u32),
}

impl AccountFilter {
    pub fn matches(self, account_id: u32) -> bool {
        match self {
            AccountFilter::All => true,
            AccountFilter::Single(id) => id == account_id,
        }
    }
}

/// A synthesized future transaction contributing to a bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FutureTransaction {
    pub name: String,
    pub amount: f64,
}

/// One bucket of the forecast series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDataPoint {
    /// End of the bucket
    pub date: NaiveDate,

    /// Bucket label at the horizon's granularity
    pub label: String,

    /// Running balance after this bucket's net amount
    pub balance: f64,

    /// Transactions that fell within the bucket
    pub transactions: Vec<FutureTransaction>,

    /// Balance repeated on the historical display series
    pub historical_balance: Option<f64>,

    /// Balance repeated on the projected display series
    pub projected_balance: Option<f64>,
}

impl BalancePoint for ForecastDataPoint {
    fn balance(&self) -> f64 {
        self.balance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_end_dates() {
        let today = date(2026, 1, 10);
        assert_eq!(ForecastPeriod::Week.end_date(today), date(2026, 1, 17));
        assert_eq!(ForecastPeriod::Month.end_date(today), date(2026, 2, 10));
        assert_eq!(ForecastPeriod::NinetyDays.end_date(today), date(2026, 4, 10));
        assert_eq!(ForecastPeriod::SixMonths.end_date(today), date(2026, 7, 10));
        assert_eq!(ForecastPeriod::Year.end_date(today), date(2027, 1, 10));
    }

    #[test]
    fn test_period_tokens() {
        assert_eq!("90days".parse::<ForecastPeriod>(), Ok(ForecastPeriod::NinetyDays));
        assert_eq!("week".parse::<ForecastPeriod>(), Ok(ForecastPeriod::Week));
        assert!("fortnight".parse::<ForecastPeriod>().is_err());

        let period: ForecastPeriod = serde_json::from_str("\"6months\"").unwrap();
        assert_eq!(period, ForecastPeriod::SixMonths);
    }

    #[test]
    fn test_filter() {
        assert!(AccountFilter::All.matches(7));
        assert!(AccountFilter::Single(7).matches(7));
        assert!(!AccountFilter::Single(7).matches(8));
    }
}
