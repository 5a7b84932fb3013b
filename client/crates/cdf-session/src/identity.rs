use crate::{SessionError, SessionResult};

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use log::warn;
use serde::{Deserialize, Serialize};

/// Identity recovered from the payload segment of a bearer token.
///
/// The signature is never checked here; the backend does that. This is only
/// used to pick a user id for requests and to drive role-gated screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedIdentity {
    pub user_id: i64,
    pub role: String,
    /// Expiration timestamp (Unix), when the backend includes one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

/// Decode a token, logging and swallowing any structural problem.
pub fn decode_token(token: &str) -> Option<DecodedIdentity> {
    match try_decode_token(token) {
        Ok(identity) => Some(identity),
        Err(e) => {
            warn!("Could not decode session token: {e}");
            None
        }
    }
}

/// Decode a token, reporting why it is malformed.
pub fn try_decode_token(token: &str) -> SessionResult<DecodedIdentity> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(SessionError::malformed_token(format!(
            "expected 3 segments, found {}",
            segments.len()
        )));
    }

    let payload = decode_segment(segments[1])
        .map_err(|e| SessionError::malformed_token(format!("payload is not base64: {e}")))?;

    serde_json::from_slice::<DecodedIdentity>(&payload)
        .map_err(|e| SessionError::malformed_token(format!("payload is not identity JSON: {e}")))
}

/// base64url with optional padding. Tokens minted by some libraries use the
/// standard alphabet, so `+` and `/` are mapped onto it first.
fn decode_segment(segment: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let normalized: String = segment
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();

    URL_SAFE_NO_PAD.decode(normalized)
}
