//! Jakarta MRT schedule server.
//!
//! A small JSON API over the MRT website's station feed: lists stations
//! and the departures still to come today from a given station.

pub mod config;
pub mod domain;
pub mod schedule;
pub mod upstream;
pub mod web;
