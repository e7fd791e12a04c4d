//! Level and growing annuities (payments at the end of each period)

use log::debug;

use crate::error::{ensure_count, ensure_divisor, ensure_finite, finite_result, FinanceResult};

/// Present value of a level ordinary annuity
///
/// `(payment / rate) * (1 - (1 + rate)^-periods)`
pub fn present_value_annuity(payment: f64, rate: f64, periods: f64) -> FinanceResult<f64> {
    const FORMULA: &str = "present_value_annuity";
    ensure_finite(FORMULA, "payment", payment)?;
    ensure_finite(FORMULA, "rate", rate)?;
    ensure_count(FORMULA, "periods", periods)?;
    ensure_divisor(FORMULA, "rate is zero", rate)?;

    let pv = finite_result(FORMULA, (payment / rate) * (1.0 - (1.0 + rate).powf(-periods)))?;
    debug!("present_value_annuity(payment={payment}, rate={rate}, periods={periods}) = {pv}");
    Ok(pv)
}

/// Future value of a level ordinary annuity
///
/// `payment * ((1 + rate)^periods - 1) / rate`
pub fn future_value_annuity(payment: f64, rate: f64, periods: f64) -> FinanceResult<f64> {
    const FORMULA: &str = "future_value_annuity";
    ensure_finite(FORMULA, "payment", payment)?;
    ensure_finite(FORMULA, "rate", rate)?;
    ensure_count(FORMULA, "periods", periods)?;
    ensure_divisor(FORMULA, "rate is zero", rate)?;

    let fv = finite_result(FORMULA, payment * (((1.0 + rate).powf(periods) - 1.0) / rate))?;
    debug!("future_value_annuity(payment={payment}, rate={rate}, periods={periods}) = {fv}");
    Ok(fv)
}

/// Future value of an annuity whose payment grows at `growth` per period
///
/// `payment * ((1 + rate)^periods - (1 + growth)^periods) / (rate - growth)`.
/// Equal `rate` and `growth` is a domain error.
pub fn future_value_growing_annuity(
    payment: f64,
    rate: f64,
    growth: f64,
    periods: f64,
) -> FinanceResult<f64> {
    const FORMULA: &str = "future_value_growing_annuity";
    ensure_finite(FORMULA, "payment", payment)?;
    ensure_finite(FORMULA, "rate", rate)?;
    ensure_finite(FORMULA, "growth", growth)?;
    ensure_count(FORMULA, "periods", periods)?;
    ensure_divisor(FORMULA, "rate equals growth", rate - growth)?;

    let compounded = (1.0 + rate).powf(periods) - (1.0 + growth).powf(periods);
    let fv = finite_result(FORMULA, payment * compounded / (rate - growth))?;
    debug!(
        "future_value_growing_annuity(payment={payment}, rate={rate}, growth={growth}, \
         periods={periods}) = {fv}"
    );
    Ok(fv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FinanceError;
    use crate::tvm::{future_value, present_value};
    use approx::assert_relative_eq;

    #[test]
    fn test_present_value_annuity() {
        // $100/month for 12 months at 6% annual
        let pv = present_value_annuity(100.0, 0.06 / 12.0, 12.0).unwrap();
        assert!((pv - 1161.89).abs() < 0.01, "got {}", pv);
    }

    #[test]
    fn test_annuity_matches_sum_of_single_payments() {
        let (payment, rate, n) = (1000.0, 0.0675, 20);

        let pv_sum: f64 = (1..=n)
            .map(|t| present_value(payment, rate, t as f64).unwrap())
            .sum();
        let pv = present_value_annuity(payment, rate, n as f64).unwrap();
        assert_relative_eq!(pv, pv_sum, epsilon = 1e-8);

        // Payment t compounds for n - t periods
        let fv_sum: f64 = (1..=n)
            .map(|t| future_value(payment, rate, (n - t) as f64).unwrap())
            .sum();
        let fv = future_value_annuity(payment, rate, n as f64).unwrap();
        assert_relative_eq!(fv, fv_sum, epsilon = 1e-8);
    }

    #[test]
    fn test_future_value_annuity_reference() {
        let fv = future_value_annuity(1000.0, 0.0675, 20.0).unwrap();
        assert!((fv - 39893.57).abs() < 0.01);
    }

    #[test]
    fn test_annuities_zero_rate() {
        assert!(matches!(
            present_value_annuity(1000.0, 0.0, 10.0),
            Err(FinanceError::Domain { formula: "present_value_annuity", .. })
        ));
        assert!(matches!(
            future_value_annuity(1000.0, 0.0, 10.0),
            Err(FinanceError::Domain { formula: "future_value_annuity", .. })
        ));
    }

    #[test]
    fn test_growing_annuity_reference() {
        let fv = future_value_growing_annuity(1000.0, 0.0675, 0.05, 20.0).unwrap();
        assert!((fv - 59401.05).abs() < 0.01, "got {}", fv);
    }

    #[test]
    fn test_growing_annuity_zero_growth_is_level_annuity() {
        let growing = future_value_growing_annuity(500.0, 0.04, 0.0, 15.0).unwrap();
        let level = future_value_annuity(500.0, 0.04, 15.0).unwrap();
        assert_relative_eq!(growing, level, max_relative = 1e-12);
    }

    #[test]
    fn test_growing_annuity_rate_equals_growth() {
        let err = future_value_growing_annuity(1000.0, 0.05, 0.05, 20.0).unwrap_err();
        assert_eq!(
            err,
            FinanceError::Domain {
                formula: "future_value_growing_annuity",
                reason: "rate equals growth"
            }
        );
    }

    #[test]
    fn test_growing_annuity_rejects_negative_periods() {
        assert!(matches!(
            future_value_growing_annuity(1000.0, 0.07, 0.05, -1.0),
            Err(FinanceError::InvalidArgument { name: "periods", .. })
        ));
    }
}
