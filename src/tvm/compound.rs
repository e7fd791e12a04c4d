//! Compounding and discounting of a single sum

use log::debug;

use crate::error::{ensure_count, ensure_divisor, ensure_finite, finite_result, FinanceResult};

/// Future value of a present sum compounded once per period
///
/// `pv * (1 + rate)^periods`. Periods may be fractional.
///
/// # Example
/// ```
/// use finance_formulas::future_value;
///
/// let fv = future_value(1000.0, 0.0675, 20.0).unwrap();
/// assert!((fv - 3692.82).abs() < 0.01);
/// ```
pub fn future_value(pv: f64, rate: f64, periods: f64) -> FinanceResult<f64> {
    const FORMULA: &str = "future_value";
    ensure_finite(FORMULA, "pv", pv)?;
    ensure_finite(FORMULA, "rate", rate)?;
    ensure_count(FORMULA, "periods", periods)?;

    let fv = finite_result(FORMULA, pv * (1.0 + rate).powf(periods))?;
    debug!("future_value(pv={pv}, rate={rate}, periods={periods}) = {fv}");
    Ok(fv)
}

/// Future value of a present sum under continuous compounding
///
/// `pv * e^(rate * time)`
pub fn future_value_continuous(pv: f64, rate: f64, time: f64) -> FinanceResult<f64> {
    const FORMULA: &str = "future_value_continuous";
    ensure_finite(FORMULA, "pv", pv)?;
    ensure_finite(FORMULA, "rate", rate)?;
    ensure_count(FORMULA, "time", time)?;

    let fv = finite_result(FORMULA, pv * (rate * time).exp())?;
    debug!("future_value_continuous(pv={pv}, rate={rate}, time={time}) = {fv}");
    Ok(fv)
}

/// Present value of a future sum discounted once per period
///
/// `fv / (1 + rate)^periods`. A rate of exactly -1 makes the discount
/// base zero and is rejected.
pub fn present_value(fv: f64, rate: f64, periods: f64) -> FinanceResult<f64> {
    const FORMULA: &str = "present_value";
    ensure_finite(FORMULA, "fv", fv)?;
    ensure_finite(FORMULA, "rate", rate)?;
    ensure_count(FORMULA, "periods", periods)?;
    ensure_divisor(FORMULA, "rate of -1 discounts by zero", 1.0 + rate)?;

    let pv = finite_result(FORMULA, fv / (1.0 + rate).powf(periods))?;
    debug!("present_value(fv={fv}, rate={rate}, periods={periods}) = {pv}");
    Ok(pv)
}
