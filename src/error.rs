//! Error types shared by every formula family

use thiserror::Error;

/// Errors raised by the formula functions
///
/// Every formula either returns a finite number (or schedule of finite numbers)
/// or one of these. `NaN` and `Infinity` never escape the library.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FinanceError {
    /// A divisor in the formula evaluates to zero
    #[error("domain error in {formula}: {reason}")]
    Domain {
        formula: &'static str,
        reason: &'static str,
    },

    /// An input is negative where a count is required, or is not a finite number
    #[error("invalid argument to {formula}: {name} = {value}")]
    InvalidArgument {
        formula: &'static str,
        name: &'static str,
        value: f64,
    },

    /// The inputs were valid but the result overflowed or is NaN
    #[error("{formula} produced a non-finite result")]
    NonFinite { formula: &'static str },

    /// Root search for the internal rate of return gave up
    #[error("internal rate of return did not converge after {iterations} iterations")]
    NoConvergence { iterations: u32 },
}

/// Result type for all formula operations
pub type FinanceResult<T> = Result<T, FinanceError>;

/// Reject NaN and infinite inputs
pub(crate) fn ensure_finite(
    formula: &'static str,
    name: &'static str,
    value: f64,
) -> FinanceResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FinanceError::InvalidArgument { formula, name, value })
    }
}

/// Reject negative, NaN or infinite period and time counts
pub(crate) fn ensure_count(
    formula: &'static str,
    name: &'static str,
    value: f64,
) -> FinanceResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(FinanceError::InvalidArgument { formula, name, value })
    }
}

/// Fail with a domain error when a divisor is exactly zero
pub(crate) fn ensure_divisor(
    formula: &'static str,
    reason: &'static str,
    divisor: f64,
) -> FinanceResult<()> {
    if divisor == 0.0 {
        Err(FinanceError::Domain { formula, reason })
    } else {
        Ok(())
    }
}

/// Pass a computed value through, or report it as non-finite
pub(crate) fn finite_result(formula: &'static str, value: f64) -> FinanceResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FinanceError::NonFinite { formula })
    }
}
