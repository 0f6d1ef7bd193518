//! Calendar arithmetic for payment cadences

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::account::PaymentFrequency;

/// Number of payment periods in a year for a cadence
pub fn periods_per_year(frequency: PaymentFrequency) -> u32 {
    match frequency {
        PaymentFrequency::Weekly | PaymentFrequency::AcceleratedWeekly => 52,
        PaymentFrequency::Biweekly | PaymentFrequency::AcceleratedBiweekly => 26,
        PaymentFrequency::SemiMonthly => 24,
        PaymentFrequency::Monthly => 12,
        PaymentFrequency::Quarterly => 4,
        PaymentFrequency::Yearly => 1,
    }
}

/// Advance a date by one payment period.
///
/// Pure; the input date is never mutated. Month-based cadences clamp to the
/// end of shorter months (Jan 31 + 1 month = Feb 28). Arithmetic saturates at
/// the calendar limits rather than wrapping.
pub fn advance_date(date: NaiveDate, frequency: PaymentFrequency) -> NaiveDate {
    match frequency {
        PaymentFrequency::Weekly | PaymentFrequency::AcceleratedWeekly => {
            date.checked_add_days(Days::new(7)).unwrap_or(date)
        }
        PaymentFrequency::Biweekly | PaymentFrequency::AcceleratedBiweekly => {
            date.checked_add_days(Days::new(14)).unwrap_or(date)
        }
        PaymentFrequency::SemiMonthly => semi_monthly_next(date),
        PaymentFrequency::Monthly => date.checked_add_months(Months::new(1)).unwrap_or(date),
        PaymentFrequency::Quarterly => date.checked_add_months(Months::new(3)).unwrap_or(date),
        PaymentFrequency::Yearly => date.checked_add_months(Months::new(12)).unwrap_or(date),
    }
}

/// Semi-monthly cadence pays on the 15th and the 1st: before the 15th the
/// next date is the 15th of the same month, otherwise the 1st of the next.
fn semi_monthly_next(date: NaiveDate) -> NaiveDate {
    if date.day() < 15 {
        date.with_day(15).unwrap_or(date)
    } else {
        let next_month = date.checked_add_months(Months::new(1)).unwrap_or(date);
        next_month.with_day(1).unwrap_or(next_month)
    }
}

/// Month bucket label, e.g. "Jun 2024"
pub fn month_label(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// Day bucket label, e.g. "Jun 3"
pub fn day_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_periods_per_year() {
        assert_eq!(periods_per_year(PaymentFrequency::Weekly), 52);
        assert_eq!(periods_per_year(PaymentFrequency::AcceleratedWeekly), 52);
        assert_eq!(periods_per_year(PaymentFrequency::Biweekly), 26);
        assert_eq!(periods_per_year(PaymentFrequency::AcceleratedBiweekly), 26);
        assert_eq!(periods_per_year(PaymentFrequency::SemiMonthly), 24);
        assert_eq!(periods_per_year(PaymentFrequency::Monthly), 12);
        assert_eq!(periods_per_year(PaymentFrequency::Quarterly), 4);
        assert_eq!(periods_per_year(PaymentFrequency::Yearly), 1);
    }

    #[test]
    fn test_advance_weekly() {
        assert_eq!(
            advance_date(date(2026, 1, 10), PaymentFrequency::Weekly),
            date(2026, 1, 17)
        );
        assert_eq!(
            advance_date(date(2026, 1, 10), PaymentFrequency::Biweekly),
            date(2026, 1, 24)
        );
    }

    #[test]
    fn test_advance_semi_monthly() {
        assert_eq!(
            advance_date(date(2026, 1, 10), PaymentFrequency::SemiMonthly),
            date(2026, 1, 15)
        );
        assert_eq!(
            advance_date(date(2026, 1, 20), PaymentFrequency::SemiMonthly),
            date(2026, 2, 1)
        );
        // Exactly the 15th rolls to the 1st of the next month
        assert_eq!(
            advance_date(date(2026, 1, 15), PaymentFrequency::SemiMonthly),
            date(2026, 2, 1)
        );
        // December rolls into January of the next year
        assert_eq!(
            advance_date(date(2026, 12, 20), PaymentFrequency::SemiMonthly),
            date(2027, 1, 1)
        );
    }

    #[test]
    fn test_advance_monthly_clamps_short_months() {
        assert_eq!(
            advance_date(date(2026, 1, 31), PaymentFrequency::Monthly),
            date(2026, 2, 28)
        );
        assert_eq!(
            advance_date(date(2024, 1, 31), PaymentFrequency::Monthly),
            date(2024, 2, 29)
        );
    }

    #[test]
    fn test_advance_quarterly_and_yearly() {
        assert_eq!(
            advance_date(date(2026, 1, 10), PaymentFrequency::Quarterly),
            date(2026, 4, 10)
        );
        assert_eq!(
            advance_date(date(2026, 11, 10), PaymentFrequency::Quarterly),
            date(2027, 2, 10)
        );
        assert_eq!(
            advance_date(date(2026, 2, 28), PaymentFrequency::Yearly),
            date(2027, 2, 28)
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(month_label(date(2024, 6, 1)), "Jun 2024");
        assert_eq!(day_label(date(2024, 6, 3)), "Jun 3");
    }
}
