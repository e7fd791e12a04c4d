//! Depreciation of fixed assets bought for cash
//!
//! Supported methods:
//! - **Straight-line**: constant expense per period
//! - **Sum-of-the-years'-digits**: accelerated, weights `life..=1`
//! - **Declining balance**: fixed multiple of the straight-line rate applied to
//!   the remaining cost, with the last period absorbing the remainder
//!
//! Schedules are returned in chronological order, one entry per period.
//! [`DepreciationSchedule`] adds accumulated depreciation and book value.

mod methods;
mod schedule;

pub use methods::{declining_balance, straight_line, sum_of_years_digits};
pub use schedule::{DepreciationMethod, DepreciationSchedule, ScheduleRow};
