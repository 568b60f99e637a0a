//! Upstream client error types.

/// Errors that can occur when talking to the upstream feed.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// Connection failed or timed out
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("upstream returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Client settings rejected before any request was made
    #[error("invalid upstream config: {0}")]
    Config(&'static str),

    /// Body did not match the expected JSON shape
    #[error("upstream JSON decode error: {message}")]
    Decode {
        message: String,
        body: Option<String>,
    },
}
