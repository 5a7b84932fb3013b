use crate::{ApiError, ErrorKind, LOGIN_ROUTE, TransportError};

use cdf_session::SessionManager;

use log::{debug, info};
use serde_json::{Map, Value};

pub const SESSION_EXPIRED_MESSAGE: &str = "Unauthorized - redirecting to login.";
pub const NOT_FOUND_MESSAGE: &str = "Not found.";
pub const SERVER_ERROR_MESSAGE: &str = "Server error. Please try again later.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Unable to reach the server.";

const FIELD_SEPARATOR: &str = " | ";
const ERROR_SEPARATOR: &str = ", ";

/// Turns every failed exchange into an [`ApiError`].
///
/// A 401 also clears the stored token; the returned
/// [`ApiError::SessionExpired`] tells the caller to navigate to login.
/// Never panics and never returns anything but a value.
#[derive(Debug, Clone)]
pub struct Normalizer {
    session: SessionManager,
}

impl Normalizer {
    pub fn new(session: SessionManager) -> Self {
        Self { session }
    }

    /// Normalise a transport failure. `default_message` is used whenever
    /// neither the body nor the status says anything more specific.
    pub fn normalize(&self, error: &TransportError, default_message: &str) -> ApiError {
        match error {
            TransportError::Status { status: 401, .. } => self.expire_session(),

            TransportError::Status { status, body, .. } => {
                if let Some(message) = body.as_ref().and_then(extract_message) {
                    return ApiError::rejected(ErrorKind::Validation, message);
                }

                match *status {
                    404 => ApiError::rejected(ErrorKind::NotFound, NOT_FOUND_MESSAGE),
                    s if s >= 500 => ApiError::rejected(ErrorKind::Server, SERVER_ERROR_MESSAGE),
                    _ => ApiError::rejected(ErrorKind::Other, default_message),
                }
            }

            TransportError::NoResponse { message, .. } => {
                debug!("No response from backend: {message}");
                ApiError::rejected(ErrorKind::Network, NETWORK_ERROR_MESSAGE)
            }

            TransportError::Local { message, .. } => {
                debug!("Local failure before/after request: {message}");
                ApiError::rejected(ErrorKind::Unknown, default_message)
            }
        }
    }

    /// Normalise a success-status body that nonetheless says `"status": "error"`.
    pub fn normalize_body(&self, body: &Value, default_message: &str) -> ApiError {
        match extract_message(body) {
            Some(message) => ApiError::rejected(ErrorKind::Validation, message),
            None => ApiError::rejected(ErrorKind::Other, default_message),
        }
    }

    fn expire_session(&self) -> ApiError {
        self.session.clear_token();
        info!("Received 401; session cleared, redirecting to {LOGIN_ROUTE}");
        ApiError::SessionExpired {
            message: SESSION_EXPIRED_MESSAGE.to_string(),
        }
    }
}

/// Pull a human-readable message out of an error body's `message` field.
///
/// Returns `None` when the field is missing or has no usable content.
pub fn extract_message(body: &Value) -> Option<String> {
    match body.get("message")? {
        Value::String(message) if !message.is_empty() => Some(message.clone()),
        Value::Object(fields) => flatten_field_errors(fields),
        _ => None,
    }
}

/// Collapse `{field: [err, ...]}` into `"field: err1, err2 | field2: err1"`.
///
/// Fields keep the body's order. A bare string counts as a single error;
/// fields with nothing printable are skipped.
pub fn flatten_field_errors(fields: &Map<String, Value>) -> Option<String> {
    let parts: Vec<String> = fields
        .iter()
        .filter_map(|(field, errors)| {
            let errors: Vec<&str> = match errors {
                Value::String(error) => vec![error.as_str()],
                Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
                _ => Vec::new(),
            };

            if errors.is_empty() {
                None
            } else {
                Some(format!("{field}: {}", errors.join(ERROR_SEPARATOR)))
            }
        })
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(FIELD_SEPARATOR))
    }
}
