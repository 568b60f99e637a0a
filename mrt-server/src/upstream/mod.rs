//! Client for the Jakarta MRT website's station feed.
//!
//! The site serves station names and per-station departure lists as JSON.
//! Both currently come from the same URL in different shapes; they are
//! fetched through separate operations so the two can be pointed at
//! different endpoints without touching callers.

mod client;
mod error;

pub use client::{DEFAULT_UPSTREAM_URL, UpstreamClient, UpstreamConfig};
pub use error::UpstreamError;
