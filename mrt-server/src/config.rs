//! Process configuration from environment variables.

use std::net::SocketAddr;

use crate::upstream::UpstreamConfig;

/// Default listen port, on all interfaces.
const DEFAULT_PORT: u16 = 8080;

/// Errors reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed
    #[error("invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Server configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP server binds to
    pub listen_addr: SocketAddr,
    /// Upstream client settings
    pub upstream: UpstreamConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// Recognised variables: `LISTEN_ADDR`, `UPSTREAM_URL`,
    /// `UPSTREAM_STATIONS_URL`, `UPSTREAM_SCHEDULES_URL`. The upstream
    /// request timeout is fixed and cannot be configured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let listen_addr = parse_var(&lookup, "LISTEN_ADDR")?
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)));

        let mut upstream = UpstreamConfig::new();
        if let Some(url) = lookup("UPSTREAM_URL") {
            upstream = upstream.with_base_url(url);
        }
        if let Some(url) = lookup("UPSTREAM_STATIONS_URL") {
            upstream = upstream.with_stations_url(url);
        }
        if let Some(url) = lookup("UPSTREAM_SCHEDULES_URL") {
            upstream = upstream.with_schedules_url(url);
        }

        Ok(Self {
            listen_addr,
            upstream,
        })
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError> {
    lookup(name)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid { name, value })
        })
        .transpose()
}
