use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _env = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.api.base_url.as_str(), eq(crate::DEFAULT_API_BASE_URL));
    assert_that!(config.session.token_file.as_str(), eq(crate::DEFAULT_TOKEN_FILE));
    assert_that!(*config.logging.level, eq(LevelFilter::Warn));
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guards) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [api]
            base_url = "https://cdf.example.org"

            [session]
            token_file = "auth/bearer"

            [logging]
            level = "debug"
            colored = false
        "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.base_url.as_str(), eq("https://cdf.example.org"));
    assert_that!(config.session.token_file.as_str(), eq("auth/bearer"));
    assert_that!(*config.logging.level, eq(LevelFilter::Debug));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(
        config.token_path().unwrap(),
        eq(&temp.path().join("auth/bearer"))
    );
}

#[test]
#[serial]
fn given_env_overrides_when_load_then_env_wins_over_toml() {
    // Given
    let (temp, _guards) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[api]\nbase_url = \"https://from-file.example\"\n",
    )
    .unwrap();
    let _url = EnvGuard::set("CDF_API_BASE_URL", "http://from-env:9000");
    let _file = EnvGuard::set("CDF_LOG_FILE", "cdf.log");
    let _colored = EnvGuard::set("CDF_LOG_COLORED", "0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.base_url.as_str(), eq("http://from-env:9000"));
    assert_that!(config.logging.file.as_deref(), eq(Some("cdf.log")));
    assert_that!(config.logging.colored, eq(false));
}

// =========================================================================
// Error Tests
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_toml_error_names_file() {
    // Given
    let (temp, _guards) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[api\nbase_url = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("config.toml"));
}

#[test]
#[serial]
fn given_invalid_base_url_from_env_when_validate_then_error() {
    // Given
    let _env = setup_config_dir();
    let _url = EnvGuard::set("CDF_API_BASE_URL", "ftp://cdf.example.org");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("http://"));
}
