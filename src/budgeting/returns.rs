//! Single-period return and net present value of an investment

use log::debug;

use crate::error::{ensure_divisor, ensure_finite, finite_result, FinanceResult};

/// Rate of return over a single period
///
/// `(end_value - initial_value) / initial_value`
///
/// # Example
/// ```
/// use finance_formulas::rate_of_return;
///
/// let r = rate_of_return(129_500.0, 100_000.0).unwrap();
/// assert!((r - 0.295).abs() < 1e-12);
/// ```
pub fn rate_of_return(end_value: f64, initial_value: f64) -> FinanceResult<f64> {
    const FORMULA: &str = "rate_of_return";
    ensure_finite(FORMULA, "end_value", end_value)?;
    ensure_finite(FORMULA, "initial_value", initial_value)?;
    ensure_divisor(FORMULA, "initial value is zero", initial_value)?;

    let ror = finite_result(FORMULA, (end_value - initial_value) / initial_value)?;
    debug!("rate_of_return(end_value={end_value}, initial_value={initial_value}) = {ror}");
    Ok(ror)
}

/// Net present value of a level cash inflow received at the end of each period
///
/// Discounts `net_cash_inflow` at `rate` for each period `1..=periods` and
/// subtracts the `initial_outlay` made at period 0.
pub fn net_present_value(
    initial_outlay: f64,
    net_cash_inflow: f64,
    rate: f64,
    periods: u32,
) -> FinanceResult<f64> {
    const FORMULA: &str = "net_present_value";
    ensure_finite(FORMULA, "initial_outlay", initial_outlay)?;
    ensure_finite(FORMULA, "net_cash_inflow", net_cash_inflow)?;
    ensure_finite(FORMULA, "rate", rate)?;
    ensure_divisor(FORMULA, "rate of -1 discounts by zero", 1.0 + rate)?;

    let mut pv_inflows = 0.0;
    for period in 1..=periods {
        pv_inflows += net_cash_inflow / (1.0 + rate).powf(f64::from(period));
    }

    let npv = finite_result(FORMULA, pv_inflows - initial_outlay)?;
    debug!(
        "net_present_value(initial_outlay={initial_outlay}, net_cash_inflow={net_cash_inflow}, \
         rate={rate}, periods={periods}) = {npv}"
    );
    Ok(npv)
}

/// Net present value of an uneven series of end-of-period cash inflows
///
/// `cashflows[0]` is received at the end of period 1.
pub fn net_present_value_of(
    initial_outlay: f64,
    cashflows: &[f64],
    rate: f64,
) -> FinanceResult<f64> {
    const FORMULA: &str = "net_present_value_of";
    ensure_finite(FORMULA, "initial_outlay", initial_outlay)?;
    ensure_finite(FORMULA, "rate", rate)?;
    for &cf in cashflows {
        ensure_finite(FORMULA, "cashflow", cf)?;
    }
    ensure_divisor(FORMULA, "rate of -1 discounts by zero", 1.0 + rate)?;

    finite_result(FORMULA, discounted_inflows(cashflows, rate) - initial_outlay)
}

/// Sum of end-of-period inflows discounted at `rate`, `cashflows[0]` at period 1
///
/// Unchecked: callers validate the inputs or tolerate non-finite sums.
pub(super) fn discounted_inflows(cashflows: &[f64], rate: f64) -> f64 {
    cashflows
        .iter()
        .zip(1..)
        .map(|(&cf, period)| cf / (1.0 + rate).powi(period))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FinanceError;
    use approx::assert_relative_eq;

    #[test]
    fn test_rate_of_return() {
        let ror = rate_of_return(129_500.0, 100_000.0).unwrap();
        assert!((ror - 0.295).abs() < 1e-12);

        // Losses are negative returns
        assert!((rate_of_return(80_000.0, 100_000.0).unwrap() + 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_rate_of_return_overflow_is_non_finite() {
        assert_eq!(
            rate_of_return(1e308, -1e308),
            Err(FinanceError::NonFinite { formula: "rate_of_return" })
        );
    }

    #[test]
    fn test_rate_of_return_zero_initial_value() {
        assert_eq!(
            rate_of_return(129_500.0, 0.0),
            Err(FinanceError::Domain {
                formula: "rate_of_return",
                reason: "initial value is zero"
            })
        );
    }

    #[test]
    fn test_net_present_value_reference() {
        // npv(100000, 15000, .03, 10)
        let npv = net_present_value(100_000.0, 15_000.0, 0.03, 10).unwrap();
        assert!((npv - 27_953.04).abs() < 0.01, "got {}", npv);
    }

    #[test]
    fn test_net_present_value_no_inflows() {
        for &(ico, r, n) in &[(100_000.0, 0.03, 10), (5_000.0, 0.12, 1), (1.0, 0.0, 0)] {
            assert_eq!(net_present_value(ico, 0.0, r, n).unwrap(), -ico);
        }
    }

    #[test]
    fn test_net_present_value_zero_rate_is_undiscounted() {
        let npv = net_present_value(10_000.0, 1_500.0, 0.0, 10).unwrap();
        assert_relative_eq!(npv, 5_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_net_present_value_rate_minus_one() {
        assert!(matches!(
            net_present_value(100_000.0, 15_000.0, -1.0, 10),
            Err(FinanceError::Domain { .. })
        ));
    }

    #[test]
    fn test_net_present_value_of_matches_level_series() {
        let level = net_present_value(100_000.0, 15_000.0, 0.03, 10).unwrap();
        let series = net_present_value_of(100_000.0, &[15_000.0; 10], 0.03).unwrap();
        assert_relative_eq!(level, series, epsilon = 1e-6);
    }

    #[test]
    fn test_net_present_value_of_uneven() {
        let npv = net_present_value_of(10_000.0, &[3_000.0, 4_200.0, 6_800.0], 0.08).unwrap();
        assert!((npv - 1_776.66).abs() < 0.01, "got {}", npv);

        assert_eq!(net_present_value_of(2_500.0, &[], 0.08).unwrap(), -2_500.0);
    }
}
