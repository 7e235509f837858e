use serde_json::Value;
use thiserror::Error;

/// Errors returned by Aircall client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Base URL is not a valid absolute URL.
    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),

    /// Route could not be joined to the base URL.
    #[error("invalid route '{0}'")]
    InvalidPath(String),

    /// The requested operation id is not present in the route catalog.
    #[error("unknown operation '{0}'")]
    UnknownOperation(String),

    /// A required path template parameter was not provided.
    #[error("missing required path parameter '{parameter}' for operation '{operation_id}'")]
    MissingPathParameter {
        operation_id: String,
        parameter: String,
    },

    /// Parameters cannot be flattened into key/value pairs (query string or form body).
    #[error("invalid request parameters: {0}")]
    InvalidParameters(String),

    /// HTTP transport-layer request failure.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Body could not be encoded or parsed as JSON.
    #[error("failed to handle JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The server answered with a status outside `200..300`.
    ///
    /// `body` holds the decoded error payload, [`Value::Null`] when the
    /// response was empty, or the raw text when it was not JSON.
    #[error("response error, status {status}: {body}")]
    Response {
        status: reqwest::StatusCode,
        body: Value,
    },
}

impl ClientError {
    /// Returns the HTTP status carried by a response error.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Response { status, .. } => Some(*status),
            _ => None,
        }
    }
}
