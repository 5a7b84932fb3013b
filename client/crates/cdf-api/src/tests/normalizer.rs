use crate::{
    ApiError, ErrorKind, NETWORK_ERROR_MESSAGE, NOT_FOUND_MESSAGE, Normalizer,
    SERVER_ERROR_MESSAGE, SESSION_EXPIRED_MESSAGE, TransportError, extract_message,
};

use cdf_session::{MemorySessionStore, SessionManager, SessionStore};

use std::sync::Arc;

use googletest::assert_that;
use googletest::prelude::eq;
use serde_json::json;

const DEFAULT: &str = "Something went wrong.";

fn normalizer_with_token() -> (Arc<MemorySessionStore>, SessionManager, Normalizer) {
    let store = Arc::new(MemorySessionStore::with_token("a.b.c"));
    let session = SessionManager::new(store.clone());
    let normalizer = Normalizer::new(session.clone());
    (store, session, normalizer)
}

// =========================================================================
// 401 handling
// =========================================================================

#[test]
fn given_401_when_normalized_then_token_cleared_and_session_expired() {
    let (store, session, normalizer) = normalizer_with_token();

    let result = normalizer.normalize(&TransportError::status(401, None), DEFAULT);

    assert_eq!(
        result,
        ApiError::SessionExpired {
            message: SESSION_EXPIRED_MESSAGE.to_string()
        }
    );
    assert_eq!(session.get_token(), None);
    assert_eq!(store.get().unwrap(), None);
    assert!(session.auth_header().is_empty());
}

#[test]
fn given_401_with_message_body_when_normalized_then_body_ignored() {
    let (_, _, normalizer) = normalizer_with_token();
    let body = json!({"status": "error", "message": "Token has expired"});

    let result = normalizer.normalize(&TransportError::status(401, Some(body)), DEFAULT);

    assert!(result.is_session_expired());
    assert_that!(result.kind(), eq(ErrorKind::Unauthorized));
    assert_eq!(result.message(), SESSION_EXPIRED_MESSAGE);
}

#[test]
fn given_401_without_stored_token_when_normalized_then_still_session_expired() {
    let session = SessionManager::new(Arc::new(MemorySessionStore::new()));
    let normalizer = Normalizer::new(session);

    let result = normalizer.normalize(&TransportError::status(401, None), DEFAULT);

    assert!(result.is_session_expired());
}

// =========================================================================
// Body messages
// =========================================================================

#[test]
fn given_string_message_when_normalized_then_used_verbatim() {
    let (_, session, normalizer) = normalizer_with_token();
    let body = json!({"message": "X"});

    let result = normalizer.normalize(&TransportError::status(400, Some(body)), DEFAULT);

    assert_eq!(result, ApiError::rejected(ErrorKind::Validation, "X"));
    assert!(session.get_token().is_some());
}

#[test]
fn given_field_error_map_when_normalized_then_flattened_in_order() {
    let (_, _, normalizer) = normalizer_with_token();
    let body = json!({"message": {"name": ["required"], "email": ["invalid", "taken"]}});

    let result = normalizer.normalize(&TransportError::status(422, Some(body)), DEFAULT);

    assert_eq!(result.message(), "name: required | email: invalid, taken");
    assert_that!(result.kind(), eq(ErrorKind::Validation));
}

#[test]
fn given_field_map_order_reversed_when_flattened_then_order_follows_body() {
    let body = json!({"message": {"zeta": ["z"], "alpha": ["a"]}});

    assert_eq!(extract_message(&body).unwrap(), "zeta: z | alpha: a");
}

#[test]
fn given_field_with_single_string_when_flattened_then_treated_as_one_error() {
    let body = json!({"message": {"budget": "must be positive", "name": ["required"]}});

    assert_eq!(
        extract_message(&body).unwrap(),
        "budget: must be positive | name: required"
    );
}

#[test]
fn given_message_on_500_when_normalized_then_body_message_wins() {
    let (_, _, normalizer) = normalizer_with_token();
    let body = json!({"message": "Database is down"});

    let result = normalizer.normalize(&TransportError::status(500, Some(body)), DEFAULT);

    assert_eq!(result.message(), "Database is down");
}

#[test]
fn given_empty_field_map_when_normalized_then_falls_back_to_status() {
    let (_, _, normalizer) = normalizer_with_token();
    let body = json!({"message": {}});

    let result = normalizer.normalize(&TransportError::status(404, Some(body)), DEFAULT);

    assert_eq!(result.message(), NOT_FOUND_MESSAGE);
}

#[test]
fn given_numeric_message_when_normalized_then_falls_back_to_default() {
    let (_, _, normalizer) = normalizer_with_token();
    let body = json!({"message": 42});

    let result = normalizer.normalize(&TransportError::status(400, Some(body)), DEFAULT);

    assert_eq!(result, ApiError::rejected(ErrorKind::Other, DEFAULT));
}

#[test]
fn given_empty_string_message_when_normalized_then_falls_back_to_status() {
    let (_, _, normalizer) = normalizer_with_token();

    let on_404 = normalizer.normalize(
        &TransportError::status(404, Some(json!({"message": ""}))),
        DEFAULT,
    );
    let on_400 = normalizer.normalize(
        &TransportError::status(400, Some(json!({"message": ""}))),
        DEFAULT,
    );

    assert_eq!(on_404, ApiError::rejected(ErrorKind::NotFound, NOT_FOUND_MESSAGE));
    assert_eq!(on_400, ApiError::rejected(ErrorKind::Other, DEFAULT));
    assert_eq!(extract_message(&json!({"message": ""})), None);
}

// =========================================================================
// Status classes
// =========================================================================

#[test]
fn given_404_without_message_when_normalized_then_not_found_text() {
    let (_, _, normalizer) = normalizer_with_token();

    let result = normalizer.normalize(
        &TransportError::status(404, Some(json!({"status": "error"}))),
        DEFAULT,
    );

    assert_eq!(result, ApiError::rejected(ErrorKind::NotFound, NOT_FOUND_MESSAGE));
}

#[test]
fn given_500_without_body_when_normalized_then_server_error_text() {
    let (_, _, normalizer) = normalizer_with_token();

    let result = normalizer.normalize(&TransportError::status(500, None), DEFAULT);

    assert_eq!(result, ApiError::rejected(ErrorKind::Server, SERVER_ERROR_MESSAGE));
}

#[test]
fn given_503_without_body_when_normalized_then_server_error_text() {
    let (_, _, normalizer) = normalizer_with_token();

    let result = normalizer.normalize(&TransportError::status(503, None), DEFAULT);

    assert_eq!(result.message(), SERVER_ERROR_MESSAGE);
}

#[test]
fn given_403_without_message_when_normalized_then_default_and_token_kept() {
    let (_, session, normalizer) = normalizer_with_token();

    let result = normalizer.normalize(&TransportError::status(403, None), DEFAULT);

    assert_eq!(result, ApiError::rejected(ErrorKind::Other, DEFAULT));
    assert!(session.get_token().is_some());
}

// =========================================================================
// No response / local
// =========================================================================

#[test]
fn given_no_response_when_normalized_then_network_text_regardless_of_default() {
    let (_, _, normalizer) = normalizer_with_token();

    let result = normalizer.normalize(
        &TransportError::no_response("connection refused"),
        "Failed to fetch projects.",
    );

    assert_eq!(result, ApiError::rejected(ErrorKind::Network, NETWORK_ERROR_MESSAGE));
}

#[test]
fn given_local_error_when_normalized_then_default_message() {
    let (_, _, normalizer) = normalizer_with_token();

    let result = normalizer.normalize(&TransportError::local("bad url"), DEFAULT);

    assert_eq!(result, ApiError::rejected(ErrorKind::Unknown, DEFAULT));
}

#[test]
fn given_error_body_on_success_status_when_normalized_then_message_used() {
    let (_, _, normalizer) = normalizer_with_token();

    let with_message = normalizer.normalize_body(
        &json!({"status": "error", "message": {"name": ["required"]}}),
        DEFAULT,
    );
    let without_message = normalizer.normalize_body(&json!({"status": "error"}), DEFAULT);

    assert_eq!(with_message.message(), "name: required");
    assert_eq!(without_message.message(), DEFAULT);
}
