//! Schedule service.

use chrono::{Local, NaiveTime};
use tracing::{debug, instrument};

use crate::domain::{DepartureTime, Direction, ScheduleRecord, TimeFormatError, parse_time_list};

use super::error::ScheduleError;
use super::response::{ScheduleResponse, StationResponse};
use super::source::ScheduleSource;

/// Answers station and departure queries from a [`ScheduleSource`].
///
/// Holds no state besides the source; every call fetches fresh data.
#[derive(Debug, Clone)]
pub struct ScheduleService<S> {
    source: S,
}

impl<S: ScheduleSource> ScheduleService<S> {
    /// Create a service over the given source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// List every station, in upstream order.
    #[instrument(skip(self))]
    pub async fn list_stations(&self) -> Result<Vec<StationResponse>, ScheduleError> {
        let stations = self.source.stations().await?;
        debug!(count = stations.len(), "fetched stations");

        Ok(stations.into_iter().map(StationResponse::from).collect())
    }

    /// Remaining departures today from a station, using the local clock.
    pub async fn schedule_for_station(
        &self,
        station_id: &str,
    ) -> Result<Vec<ScheduleResponse>, ScheduleError> {
        self.schedule_for_station_at(station_id, Local::now().time())
            .await
    }

    /// Remaining departures from a station after `now`.
    #[instrument(skip(self))]
    pub async fn schedule_for_station_at(
        &self,
        station_id: &str,
        now: NaiveTime,
    ) -> Result<Vec<ScheduleResponse>, ScheduleError> {
        let records = self.source.schedules().await?;
        debug!(count = records.len(), "fetched schedule records");

        let record =
            ScheduleRecord::find(&records, station_id).ok_or_else(|| ScheduleError::NotFound {
                station_id: station_id.to_string(),
            })?;

        Ok(upcoming_departures(record, now)?)
    }
}

/// Departures from `record` strictly after `now`.
///
/// Both lists are parsed before anything is filtered, so one malformed
/// time fails the whole record. Results list every Lebak Bulus departure
/// before every Bundaran HI departure, each in upstream order.
pub fn upcoming_departures(
    record: &ScheduleRecord,
    now: NaiveTime,
) -> Result<Vec<ScheduleResponse>, TimeFormatError> {
    let now = DepartureTime::from_clock(now);

    let parsed = Direction::ALL
        .into_iter()
        .map(|direction| parse_time_list(direction.times(record)).map(|times| (direction, times)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(parsed
        .into_iter()
        .flat_map(|(direction, times)| {
            times
                .into_iter()
                .filter(move |t| *t > now)
                .map(move |t| ScheduleResponse::new(direction, t))
        })
        .collect())
}
