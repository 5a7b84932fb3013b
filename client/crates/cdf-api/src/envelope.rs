use crate::ClientResult;

use serde::{Deserialize, Serialize};

/// Wire shape of every service outcome.
///
/// ```json
/// {"status": "success", "data": ...}
/// {"status": "error", "message": "..."}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ApiEnvelope<T> {
    Success { data: T },
    Error { message: String },
}

impl<T> ApiEnvelope<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiEnvelope::Success { .. })
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ApiEnvelope::Success { data } => Some(data),
            ApiEnvelope::Error { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ApiEnvelope::Success { .. } => None,
            ApiEnvelope::Error { message } => Some(message),
        }
    }
}

impl<T> From<ClientResult<T>> for ApiEnvelope<T> {
    fn from(result: ClientResult<T>) -> Self {
        match result {
            Ok(data) => ApiEnvelope::Success { data },
            Err(e) => ApiEnvelope::Error {
                message: e.message().to_string(),
            },
        }
    }
}
