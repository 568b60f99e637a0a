//! Domain types for the MRT schedule service.
//!
//! Records decoded from the upstream feed and the strict time parsing
//! applied to their departure lists.

mod direction;
mod station;
mod time;

pub use direction::Direction;
pub use station::{ScheduleRecord, Station};
pub use time::{DepartureTime, TimeFormatError, parse_time_list};
