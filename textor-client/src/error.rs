//! Error types for the textor client

use textor_core::domain::job::JobStatus;
use textor_core::domain::response::ResponseDocument;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when using the textor client
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// A response body or stored shard was not valid JSON of the expected shape
    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The waiter's time budget ran out before the probe finished
    #[error("timed out in {timeout_secs} seconds")]
    Timeout {
        /// The configured budget, in whole seconds
        timeout_secs: u64,
    },

    /// The job reached a terminal failure status
    #[error("job failed with status {status}")]
    JobFailed {
        /// The terminal status observed
        status: JobStatus,
        /// The last status response, as returned by the service
        response: Box<ResponseDocument>,
    },

    /// Invalid input to a request builder
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A stored result object's name is not a shard ordinal
    #[error("stored object {key:?} is not a numbered result shard")]
    MalformedShardName {
        /// Full key of the offending object
        key: String,
    },

    /// Filesystem-backed object store IO failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a waiter timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Check if this error is a terminal job failure
    pub fn is_job_failed(&self) -> bool {
        matches!(self, Self::JobFailed { .. })
    }
}
