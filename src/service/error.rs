//! Error types for book data service calls.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while talking to the book API.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Failed to reach the API or the transfer broke off
    #[error("{source}")]
    Connection {
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the client timeout
    #[error("timeout of {duration}s exceeded")]
    Timeout { duration: u64 },

    /// The API answered with a non-success status
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The request was rejected before any I/O
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The configured base URL cannot be extended into an endpoint
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ServiceError {
    /// Build the status error the way HTTP clients usually word it.
    pub fn status(status: u16) -> Self {
        ServiceError::Status {
            status,
            message: format!("Request failed with status code {}", status),
        }
    }

    /// Classify this error for the store.
    pub fn kind(&self) -> FailureKind {
        match self {
            ServiceError::Connection { .. } => FailureKind::Connection,
            ServiceError::Timeout { .. } => FailureKind::Timeout,
            ServiceError::Status { status, .. } => FailureKind::Status { status: *status },
            ServiceError::Decode(_) => FailureKind::Decode,
            ServiceError::InvalidRequest(_) | ServiceError::InvalidUrl(_) => {
                FailureKind::InvalidRequest
            }
        }
    }
}

/// Category of a failed service call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FailureKind {
    Connection,
    Timeout,
    Status { status: u16 },
    Decode,
    InvalidRequest,
}

/// Normalized failure attached to a rejected operation.
///
/// Keeps the error's category next to its message so callers can tell a
/// missing book from a dead network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct FetchFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<&ServiceError> for FetchFailure {
    fn from(err: &ServiceError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl From<ServiceError> for FetchFailure {
    fn from(err: ServiceError) -> Self {
        Self::from(&err)
    }
}
