//! Finance Formulas - closed-form business and accounting formulas
//!
//! This library provides:
//! - Time value of money (future/present value, level and growing annuities)
//! - Depreciation schedules (straight-line, sum-of-years-digits, declining balance)
//! - Capital budgeting metrics (rate of return, net present value, IRR)
//!
//! Every formula is a pure function over `f64` inputs. Zero divisors and
//! invalid counts are reported through [`FinanceError`] instead of leaking
//! `NaN` or `Infinity`. No rounding is applied to results.

pub mod error;
pub mod tvm;
pub mod depreciation;
pub mod budgeting;

// Re-export commonly used types
pub use error::{FinanceError, FinanceResult};
pub use tvm::{
    future_value, future_value_annuity, future_value_continuous, future_value_growing_annuity,
    present_value, present_value_annuity,
};
pub use depreciation::{
    declining_balance, straight_line, sum_of_years_digits, DepreciationMethod, DepreciationSchedule,
    ScheduleRow,
};
pub use budgeting::{
    internal_rate_of_return, net_present_value, net_present_value_of, rate_of_return, IrrConfig,
};
