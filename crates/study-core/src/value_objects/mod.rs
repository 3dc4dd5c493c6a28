//! Value objects - immutable domain primitives

pub mod id;
pub mod recurrence;

pub use id::{Id, IdParseError};
pub use recurrence::{DayCodeError, RecurrenceDays, DAY_NAMES};
