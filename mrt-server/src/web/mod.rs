//! Web layer for the MRT schedule service.
//!
//! Exposes the station list and per-station departures as JSON.

mod dto;
mod routes;
mod state;

pub use dto::ErrorResponse;
pub use routes::{AppError, create_router};
pub use state::AppState;
