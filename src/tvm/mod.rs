//! Time value of money: single sums, level annuities and growing annuities
//!
//! Rates are decimal per-period rates (0.0675 for 6.75%). Period counts are
//! `f64` so fractional compounding periods are accepted; negative counts are
//! rejected. Results are not rounded.

mod compound;
mod annuity;

pub use compound::{future_value, future_value_continuous, present_value};
pub use annuity::{future_value_annuity, future_value_growing_annuity, present_value_annuity};
