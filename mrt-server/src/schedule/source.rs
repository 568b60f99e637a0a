//! Where schedule data comes from.

use std::future::Future;

use crate::domain::{ScheduleRecord, Station};
use crate::upstream::{UpstreamClient, UpstreamError};

/// Trait for providing station and schedule records.
///
/// This abstraction allows the service to be tested without network access.
pub trait ScheduleSource {
    /// Fetch every station.
    fn stations(&self) -> impl Future<Output = Result<Vec<Station>, UpstreamError>> + Send;

    /// Fetch schedule records for every station.
    fn schedules(&self) -> impl Future<Output = Result<Vec<ScheduleRecord>, UpstreamError>> + Send;
}

impl ScheduleSource for UpstreamClient {
    fn stations(&self) -> impl Future<Output = Result<Vec<Station>, UpstreamError>> + Send {
        self.fetch_stations()
    }

    fn schedules(&self) -> impl Future<Output = Result<Vec<ScheduleRecord>, UpstreamError>> + Send {
        self.fetch_schedules()
    }
}
