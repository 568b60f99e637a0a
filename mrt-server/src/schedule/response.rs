//! Response records serialized by the API.

use serde::Serialize;

use crate::domain::{DepartureTime, Direction, Station};

/// A station in the station list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationResponse {
    pub id: String,
    pub name: String,
}

impl From<Station> for StationResponse {
    fn from(station: Station) -> Self {
        Self {
            id: station.id,
            name: station.name,
        }
    }
}

/// One upcoming departure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    /// Terminus the train is heading to
    pub station_name: String,
    /// Departure time, "HH:MM"
    pub time: String,
}

impl ScheduleResponse {
    pub fn new(direction: Direction, time: DepartureTime) -> Self {
        Self {
            station_name: direction.label().to_string(),
            time: time.to_string(),
        }
    }
}
