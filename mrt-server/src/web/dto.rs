//! Data transfer objects for web responses.
//!
//! Successful responses serialize [`StationResponse`](crate::schedule::StationResponse)
//! and [`ScheduleResponse`](crate::schedule::ScheduleResponse) directly.

use serde::Serialize;

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
