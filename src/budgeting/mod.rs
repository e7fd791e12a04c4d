//! Capital budgeting metrics: rate of return, net present value and IRR

mod returns;
mod irr;

pub use returns::{net_present_value, net_present_value_of, rate_of_return};
pub use irr::{internal_rate_of_return, IrrConfig};
