//! Date parsing and calendar period resolution.
//!
//! Every range produced here is half-open `[start, end)` and expressed as
//! instants at local midnight in the process time zone.

pub mod error;
pub mod resolver;

#[cfg(test)]
mod resolver_props;

pub use error::PeriodError;
pub use resolver::{DAY_FORMAT, DateRange, DateResolver, Period, PeriodQuery};
