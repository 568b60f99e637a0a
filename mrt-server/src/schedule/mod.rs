//! Station listing and upcoming departures.
//!
//! Turns upstream records into the two response shapes served by the API:
//! the station list, and the remaining departures of the day for one
//! station in both directions.

mod error;
mod response;
mod service;
mod source;

pub use error::ScheduleError;
pub use response::{ScheduleResponse, StationResponse};
pub use service::{ScheduleService, upcoming_departures};
pub use source::ScheduleSource;
