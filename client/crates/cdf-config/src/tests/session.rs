use crate::SessionConfig;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};

fn session(token_file: &str) -> SessionConfig {
    SessionConfig {
        token_file: token_file.to_string(),
    }
}

#[test]
fn given_relative_token_file_when_validate_then_ok() {
    assert_that!(session("session/token").validate(), ok(anything()));
}

#[test]
fn given_parent_traversal_when_validate_then_error() {
    let result = session("../token").validate();

    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("'..'"));
}

#[test]
fn given_absolute_token_file_when_validate_then_error() {
    assert_that!(session("/etc/token").validate(), err(anything()));
}

#[test]
fn given_empty_token_file_when_validate_then_error() {
    assert_that!(session("  ").validate(), err(anything()));
}
