use crate::tests::make_token;
use crate::{SessionError, decode_token, try_decode_token};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde_json::json;

#[test]
fn given_well_formed_token_when_decoded_then_returns_identity() {
    let token = make_token(&json!({"user_id": 42, "role": "admin", "exp": 1704067200}));

    let identity = decode_token(&token).unwrap();

    assert_eq!(identity.user_id, 42);
    assert_eq!(identity.role, "admin");
    assert_eq!(identity.exp, Some(1704067200));
}

#[test]
fn given_token_without_exp_when_decoded_then_exp_is_none() {
    let token = make_token(&json!({"user_id": 7, "role": "officer"}));

    let identity = decode_token(&token).unwrap();

    assert_eq!(identity.exp, None);
}

#[test]
fn given_non_jwt_string_when_decoded_then_returns_none() {
    assert!(decode_token("abc").is_none());
}

#[test]
fn given_empty_string_when_decoded_then_returns_none() {
    assert!(decode_token("").is_none());
}

#[test]
fn given_four_segments_when_decoded_then_reports_segment_count() {
    let result = try_decode_token("a.b.c.d");

    match result {
        Err(SessionError::MalformedToken { message, .. }) => {
            assert!(message.contains("found 4"));
        }
        other => panic!("expected MalformedToken, got {other:?}"),
    }
}

#[test]
fn given_bad_payload_when_decoded_then_location_points_at_decoder() {
    let result = try_decode_token("header.!!!.sig");

    match result {
        Err(SessionError::MalformedToken { location, .. }) => {
            assert!(location.file.ends_with("src/identity.rs"));
        }
        other => panic!("expected MalformedToken, got {other:?}"),
    }
}

#[test]
fn given_invalid_base64_payload_when_decoded_then_returns_none() {
    assert!(decode_token("header.!!!not-base64!!!.sig").is_none());
}

#[test]
fn given_payload_that_is_not_json_when_decoded_then_returns_none() {
    let payload = STANDARD.encode("plain text");
    assert!(decode_token(&format!("h.{payload}.s")).is_none());
}

#[test]
fn given_payload_missing_role_when_decoded_then_returns_none() {
    let token = make_token(&json!({"user_id": 1}));
    assert!(decode_token(&token).is_none());
}

#[test]
fn given_string_user_id_when_decoded_then_returns_none() {
    let token = make_token(&json!({"user_id": "1", "role": "admin"}));
    assert!(decode_token(&token).is_none());
}

#[test]
fn given_padded_standard_alphabet_payload_when_decoded_then_returns_identity() {
    // "??>>" pushes the standard alphabet towards "+" and "/"
    let payload = json!({"user_id": 3, "role": "member", "note": "??>>"}).to_string();
    let encoded = STANDARD.encode(payload);

    let identity = decode_token(&format!("h.{encoded}.s")).unwrap();

    assert_eq!(identity.user_id, 3);
    assert_eq!(identity.role, "member");
}
