//! Periodic interest-rate conversion

/// Convert an annual nominal percentage to the rate for one payment period.
///
/// `annual_rate_pct` must be an annual nominal rate (4.0 means 4%); a value
/// already expressed per period is a caller error and is not corrected here.
///
/// Fixed-rate Canadian mortgages are disclosed compounded semi-annually
/// regardless of payment cadence, so the semi-annual rate is converted to its
/// per-period equivalent. Everything else, including variable-rate Canadian
/// mortgages, uses simple proration.
pub fn periodic_rate(
    annual_rate_pct: f64,
    periods_per_year: u32,
    is_canadian_mortgage: bool,
    is_variable_rate: bool,
) -> f64 {
    if annual_rate_pct == 0.0 {
        return 0.0;
    }

    let periods = f64::from(periods_per_year);
    if is_canadian_mortgage && !is_variable_rate {
        let semi_annual = annual_rate_pct / 100.0 / 2.0;
        (1.0 + semi_annual).powf(2.0 / periods) - 1.0
    } else {
        annual_rate_pct / 100.0 / periods
    }
}

/// Round a monetary amount to the nearest cent
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_rate() {
        assert_eq!(periodic_rate(0.0, 12, false, false), 0.0);
        assert_eq!(periodic_rate(0.0, 12, true, false), 0.0);
    }

    #[test]
    fn test_simple_proration() {
        assert_relative_eq!(periodic_rate(6.0, 12, false, false), 0.005);
        assert_relative_eq!(periodic_rate(5.2, 52, false, false), 0.001);
        assert_relative_eq!(periodic_rate(4.0, 1, false, false), 0.04);
    }

    #[test]
    fn test_canadian_semi_annual_compounding() {
        // (1 + 0.03)^(2/12) - 1, not 6%/12
        let canadian = periodic_rate(6.0, 12, true, false);
        let naive = 6.0 / 100.0 / 12.0;
        assert!(canadian < naive);
        assert_relative_eq!(canadian, 1.03_f64.powf(2.0 / 12.0) - 1.0, epsilon = 1e-12);

        // Compounding the periodic rate back over a year lands on the
        // semi-annual disclosure rate
        assert_relative_eq!((1.0 + canadian).powi(12), 1.03_f64.powi(2), epsilon = 1e-12);
    }

    #[test]
    fn test_variable_canadian_uses_simple_proration() {
        assert_relative_eq!(periodic_rate(6.0, 12, true, true), 0.005);
        assert_relative_eq!(
            periodic_rate(6.0, 12, true, true),
            periodic_rate(6.0, 12, false, false)
        );
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(10.004), 10.0);
        assert_eq!(round_cents(10.006), 10.01);
        assert_eq!(round_cents(-10.006), -10.01);
        assert_eq!(round_cents(661.183333), 661.18);
    }
}
