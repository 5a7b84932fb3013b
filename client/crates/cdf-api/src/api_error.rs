use serde::Serialize;
use thiserror::Error;

/// Failure category, one per row of the client's error taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// 401; the session has been torn down
    Unauthorized,
    /// The backend supplied its own message (string or per-field map)
    Validation,
    NotFound,
    Server,
    /// Request sent, no response received
    Network,
    /// No request context at all
    Unknown,
    /// Any other status without a usable message
    Other,
}

/// Normalised failure of a service call.
///
/// `SessionExpired` is a signal for the composition root: the token is
/// already cleared and the caller is expected to send the user to login.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{message}")]
    SessionExpired { message: String },

    #[error("{message}")]
    Rejected { kind: ErrorKind, message: String },
}

impl ApiError {
    pub fn rejected(kind: ErrorKind, message: impl Into<String>) -> Self {
        ApiError::Rejected {
            kind,
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::SessionExpired { message } | ApiError::Rejected { message, .. } => message,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::SessionExpired { .. } => ErrorKind::Unauthorized,
            ApiError::Rejected { kind, .. } => *kind,
        }
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, ApiError::SessionExpired { .. })
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
