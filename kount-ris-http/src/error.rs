//! Error types for the HTTP transport layer.

/// Errors that can occur while carrying a RIS request over HTTP.
///
/// Transport failures (DNS, connect, timeout, body read) surface immediately
/// to the caller; nothing is retried internally. RIS-level problems are not
/// errors at this layer — the service reports them in-band and they come
/// back through the response accessors.
#[derive(Debug, thiserror::Error)]
pub enum RisHttpError {
    /// The POST to the RIS endpoint failed or its body could not be read.
    #[error("RIS request failed: {0}")]
    Request(#[from] reqwest::Error),
}
