//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::schedule::{ScheduleError, ScheduleResponse, StationResponse};

use super::dto::ErrorResponse;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/v1/api/station", get(list_stations))
        .route("/v1/api/station/:id/schedule", get(station_schedule))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every station.
async fn list_stations(
    State(state): State<AppState>,
) -> Result<Json<Vec<StationResponse>>, AppError> {
    let stations = state.schedule.list_stations().await?;
    Ok(Json(stations))
}

/// Remaining departures today from one station.
async fn station_schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ScheduleResponse>>, AppError> {
    let departures = state.schedule.schedule_for_station(&id).await?;
    Ok(Json(departures))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    NotFound { message: String },
    BadGateway { message: String },
}

impl From<ScheduleError> for AppError {
    fn from(e: ScheduleError) -> Self {
        match e {
            ScheduleError::NotFound { .. } => AppError::NotFound {
                message: e.to_string(),
            },
            // Bad time data is the upstream's fault, not the caller's
            ScheduleError::Upstream(_) | ScheduleError::Format(_) => AppError::BadGateway {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::NotFound { message } => {
                warn!(%message, "not found");
                (StatusCode::NOT_FOUND, message)
            }
            AppError::BadGateway { message } => {
                error!(%message, "upstream failure");
                (StatusCode::BAD_GATEWAY, message)
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
