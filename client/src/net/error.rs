//! Error kinds for the map/news/cat fetch layer.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal: every failure is scoped to a single request.
//! Callers catch these at the call site, log, and leave the last-known-good
//! state in place. Validation failures in the add-station flow never reach
//! this type; they surface as blocking alerts before any network call.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure modes of a single HTTP exchange with the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx HTTP status. Carries the raw response body text for
    /// diagnosability.
    #[error("request failed with status {status}: {body}")]
    Network { status: u16, body: String },
    /// The response parsed as JSON but the expected field was absent.
    #[error("response missing expected field `{0}`")]
    MalformedResponse(&'static str),
    /// The request never produced an HTTP response (connection failure,
    /// JSON decode error, or running outside the browser).
    #[error("transport error: {0}")]
    Transport(String),
}
