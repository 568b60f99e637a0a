//! Schedule service error types.

use crate::domain::TimeFormatError;
use crate::upstream::UpstreamError;

/// Errors from the schedule service.
///
/// Every variant is terminal for the request; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// Upstream unreachable, failed, or sent an unexpected body
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// No schedule record for the requested station
    #[error("station not found")]
    NotFound { station_id: String },

    /// A departure list contained a malformed time
    #[error(transparent)]
    Format(#[from] TimeFormatError),
}
