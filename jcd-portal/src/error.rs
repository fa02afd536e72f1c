//! Portal client error types.

/// Errors that can occur when interacting with the JCDecaux API.
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    /// HTTP request failed (connection refused, DNS, timeout, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// API key rejected (HTTP 403)
    #[error("unauthorized: API key rejected")]
    Unauthorized,

    /// No data exists at the requested path (HTTP 404)
    #[error("no resource found")]
    NoResourceFound,

    /// Any other non-200 status, with the original code preserved
    #[error("request failed with status {status}")]
    RequestFailed { status: u16 },

    /// A single-item request was missing its contract name and/or number
    #[error("not enough identification to resolve the resource")]
    NoIdentificationAvailable,

    /// The requested kind/filter combination has no upstream resource
    #[error("unrecognised resource type for this request")]
    UnrecognisedType,

    /// A single-item request unexpectedly resolved to a collection
    #[error("expected a single resource but the response was a collection")]
    TooManyResults,
}
