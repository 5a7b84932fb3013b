use cdf_api::{ApiEnvelope, ApiError, ClientResult};

use serde_json::Value;

pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_FAILURE: u8 = 1;
/// The token is gone; the user has to sign in again
pub(crate) const EXIT_SESSION_EXPIRED: u8 = 2;

pub(crate) fn exit_status(result: &ClientResult<Value>) -> u8 {
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(ApiError::SessionExpired { .. }) => EXIT_SESSION_EXPIRED,
        Err(ApiError::Rejected { .. }) => EXIT_FAILURE,
    }
}

/// Serialize the envelope for stdout.
pub(crate) fn render(envelope: &ApiEnvelope<Value>, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(envelope)
    } else {
        serde_json::to_string(envelope)
    }
}

/// Print the outcome and pick the exit status.
///
/// `SessionExpired` is this front end's "navigate to login": it adds a
/// sign-in hint on stderr and exits with [`EXIT_SESSION_EXPIRED`].
pub(crate) fn report(result: ClientResult<Value>, pretty: bool) -> u8 {
    let status = exit_status(&result);

    if status == EXIT_SESSION_EXPIRED {
        eprintln!("Session expired. Run `cdf login` to sign in again.");
    }

    match render(&ApiEnvelope::from(result), pretty) {
        Ok(json) => {
            println!("{}", json);
            status
        }
        Err(e) => {
            eprintln!("Error serializing response: {}", e);
            EXIT_FAILURE
        }
    }
}
