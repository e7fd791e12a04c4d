//! Depreciation expense per period for the three supported methods

use log::{debug, trace};

use crate::error::{ensure_finite, finite_result, FinanceError, FinanceResult};

/// Check the inputs shared by all methods and reject a zero life
fn validate(formula: &'static str, cost: f64, salvage: f64, life: u32) -> FinanceResult<()> {
    ensure_finite(formula, "cost", cost)?;
    ensure_finite(formula, "salvage", salvage)?;
    if life == 0 {
        return Err(FinanceError::Domain {
            formula,
            reason: "useful life is zero",
        });
    }
    Ok(())
}

/// Straight-line depreciation expense for each period of the asset's life
///
/// `(cost - salvage) / life`
pub fn straight_line(cost: f64, salvage: f64, life: u32) -> FinanceResult<f64> {
    const FORMULA: &str = "straight_line";
    validate(FORMULA, cost, salvage, life)?;

    let expense = finite_result(FORMULA, (cost - salvage) / life as f64)?;
    debug!("straight_line(cost={cost}, salvage={salvage}, life={life}) = {expense}");
    Ok(expense)
}

/// Sum-of-the-years'-digits depreciation schedule
///
/// Period weights run from `life` down to 1 over a denominator of
/// `life * (life + 1) / 2`, so the heaviest expense falls in the first period.
pub fn sum_of_years_digits(cost: f64, salvage: f64, life: u32) -> FinanceResult<Vec<f64>> {
    const FORMULA: &str = "sum_of_years_digits";
    validate(FORMULA, cost, salvage, life)?;

    let years = life as f64;
    let digits = years * (years + 1.0) / 2.0;
    let depreciable = cost - salvage;

    let schedule = (1..=life)
        .rev()
        .map(|weight| finite_result(FORMULA, depreciable * (weight as f64 / digits)))
        .collect::<FinanceResult<Vec<f64>>>()?;

    debug!(
        "sum_of_years_digits(cost={cost}, salvage={salvage}, life={life}) first={:?}",
        schedule.first()
    );
    Ok(schedule)
}

/// Declining-balance depreciation schedule
///
/// `rate` is the multiple of the straight-line rate: 1.5 for 150% declining,
/// 2.0 for double declining. Each period but the last expenses `rate / life`
/// of the remaining undepreciated cost. The last period takes whatever is
/// left of `cost - salvage`, so the schedule always totals exactly that.
pub fn declining_balance(
    cost: f64,
    salvage: f64,
    rate: f64,
    life: u32,
) -> FinanceResult<Vec<f64>> {
    const FORMULA: &str = "declining_balance";
    validate(FORMULA, cost, salvage, life)?;
    ensure_finite(FORMULA, "rate", rate)?;

    let period_rate = rate / life as f64;
    let last = life - 1;
    let mut accumulated = 0.0;
    let mut schedule = Vec::with_capacity(life as usize);

    for period in 0..life {
        let expense = if period == last {
            cost - salvage - accumulated
        } else {
            period_rate * (cost - accumulated)
        };
        let expense = finite_result(FORMULA, expense)?;
        trace!("declining_balance period {period}: expense={expense}, accumulated={accumulated}");
        schedule.push(expense);
        accumulated += expense;
    }

    debug!(
        "declining_balance(cost={cost}, salvage={salvage}, rate={rate}, life={life}) \
         total={accumulated}"
    );
    Ok(schedule)
}
