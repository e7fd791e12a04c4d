//! Internal Rate of Return (IRR) of an investment
//!
//! Newton-Raphson with a bisection fallback, over periodic rates.

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use super::returns::discounted_inflows;
use crate::error::{ensure_finite, FinanceError, FinanceResult};

/// Lowest periodic rate the search will consider (-99%)
const MIN_RATE: f64 = -0.99;
/// Highest periodic rate the search will consider (1000%)
const MAX_RATE: f64 = 10.0;

/// Root-finding settings for [`internal_rate_of_return`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrrConfig {
    /// Convergence threshold on the rate step (and NPV in bisection)
    pub tolerance: f64,

    /// Iteration cap for each of the Newton and bisection phases
    pub max_iterations: u32,

    /// Starting periodic rate for Newton-Raphson
    pub initial_guess: f64,
}

impl Default for IrrConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            max_iterations: 1000,
            initial_guess: 0.05,
        }
    }
}

impl IrrConfig {
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_initial_guess(mut self, initial_guess: f64) -> Self {
        self.initial_guess = initial_guess;
        self
    }
}

/// Calculate the periodic rate at which the investment's NPV is zero
///
/// # Arguments
/// * `initial_outlay` - Amount invested at period 0
/// * `cashflows` - End-of-period net inflows, `cashflows[0]` at period 1
/// * `config` - Search settings
///
/// # Returns
/// * The periodic IRR as a decimal (0.08 for 8%)
///
/// The combined flows must change sign at least once, otherwise no rate
/// zeroes the NPV and a domain error is returned.
pub fn internal_rate_of_return(
    initial_outlay: f64,
    cashflows: &[f64],
    config: &IrrConfig,
) -> FinanceResult<f64> {
    const FORMULA: &str = "internal_rate_of_return";
    ensure_finite(FORMULA, "initial_outlay", initial_outlay)?;
    if cashflows.is_empty() {
        return Err(FinanceError::InvalidArgument {
            formula: FORMULA,
            name: "cashflows",
            value: 0.0,
        });
    }

    for &cf in cashflows {
        ensure_finite(FORMULA, "cashflow", cf)?;
    }

    // Period 0 carries the outlay as an outflow
    let flows = || std::iter::once(-initial_outlay).chain(cashflows.iter().copied());
    let has_positive = flows().any(|cf| cf > 1e-10);
    let has_negative = flows().any(|cf| cf < -1e-10);
    if !has_positive || !has_negative {
        return Err(FinanceError::Domain {
            formula: FORMULA,
            reason: "cash flows never change sign",
        });
    }

    let investment = Investment { initial_outlay, cashflows };
    let mut rate = config.initial_guess.clamp(MIN_RATE, MAX_RATE);

    for iteration in 0..config.max_iterations {
        let npv = investment.npv(rate);
        let slope = investment.npv_slope(rate);

        if slope.abs() < 1e-20 {
            warn!("IRR derivative vanished at rate {rate}, falling back to bisection");
            return investment.bisect(config);
        }

        let new_rate = (rate - npv / slope).clamp(MIN_RATE, MAX_RATE);
        trace!("IRR newton iteration {iteration}: rate={new_rate}, npv={npv}");

        if (new_rate - rate).abs() < config.tolerance {
            debug!("IRR converged to {new_rate} after {} newton iterations", iteration + 1);
            return Ok(new_rate);
        }

        rate = new_rate;
    }

    warn!("IRR newton did not converge, falling back to bisection");
    investment.bisect(config)
}

/// Validated outlay and inflows under search
struct Investment<'a> {
    initial_outlay: f64,
    cashflows: &'a [f64],
}

impl Investment<'_> {
    fn npv(&self, rate: f64) -> f64 {
        discounted_inflows(self.cashflows, rate) - self.initial_outlay
    }

    /// d(NPV)/d(rate); the outlay at period 0 does not depend on the rate
    fn npv_slope(&self, rate: f64) -> f64 {
        self.cashflows
            .iter()
            .zip(1..)
            .map(|(&cf, period)| -f64::from(period) * cf / (1.0 + rate).powi(period + 1))
            .sum()
    }

    /// Fallback search over `[MIN_RATE, MAX_RATE]`
    fn bisect(&self, config: &IrrConfig) -> FinanceResult<f64> {
        let exhausted = FinanceError::NoConvergence { iterations: config.max_iterations };
        let (mut low, mut high) = (MIN_RATE, MAX_RATE);
        let mut npv_low = self.npv(low);

        // No root bracketed in the interval
        if npv_low * self.npv(high) > 0.0 {
            return Err(exhausted);
        }

        for iteration in 0..config.max_iterations {
            let mid = (low + high) / 2.0;
            let npv_mid = self.npv(mid);

            if npv_mid.abs() < config.tolerance || (high - low) / 2.0 < config.tolerance {
                debug!("IRR bisection converged to {mid} after {} iterations", iteration + 1);
                return Ok(mid);
            }

            if npv_mid * npv_low < 0.0 {
                high = mid;
            } else {
                low = mid;
                npv_low = npv_mid;
            }
        }

        Err(exhausted)
    }
}
