use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::Value;
use thiserror::Error;

/// Raw outcome of a failed HTTP exchange, before normalisation.
///
/// Nothing outside this crate should branch on these; the [`Normalizer`]
/// turns them into an [`ApiError`].
///
/// [`Normalizer`]: crate::Normalizer
/// [`ApiError`]: crate::ApiError
#[derive(Error, Debug)]
pub enum TransportError {
    /// The server answered with a non-success status.
    #[error("HTTP {status} response {location}")]
    Status {
        status: u16,
        /// Parsed JSON body, when there was one
        body: Option<Value>,
        location: ErrorLocation,
    },

    /// The request went out but nothing came back.
    #[error("No response from server: {message} {location}")]
    NoResponse {
        message: String,
        location: ErrorLocation,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// Failure with no request context (building, decoding, local bugs).
    #[error("Local error: {message} {location}")]
    Local {
        message: String,
        location: ErrorLocation,
    },
}

impl TransportError {
    /// Creates a Status error at caller location.
    #[track_caller]
    pub fn status(status: u16, body: Option<Value>) -> Self {
        TransportError::Status {
            status,
            body,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates a NoResponse error at caller location.
    #[track_caller]
    pub fn no_response(message: impl Into<String>) -> Self {
        TransportError::NoResponse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
            source: None,
        }
    }

    /// Creates a Local error at caller location.
    #[track_caller]
    pub fn local(message: impl Into<String>) -> Self {
        TransportError::Local {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Classify a reqwest error by whether a request actually left the client.
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return TransportError::status(status.as_u16(), None);
        }

        if err.is_connect() || err.is_timeout() || err.is_request() {
            TransportError::NoResponse {
                message: err.to_string(),
                location: ErrorLocation::from(Location::caller()),
                source: Some(err),
            }
        } else {
            TransportError::local(err.to_string())
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        TransportError::local(format!("invalid JSON: {err}"))
    }
}

impl From<reqwest::Error> for TransportError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        TransportError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for TransportError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        TransportError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, TransportError>;
