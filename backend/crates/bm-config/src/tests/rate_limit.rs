use crate::Config;
use crate::tests::{EnvGuard, setup_valid_env};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_rate_limit_env_when_load_then_applied() {
    // Given
    let (_temp, _dir, _secret) = setup_valid_env();
    let _max = EnvGuard::set("BM_RATE_LIMIT_MAX_REQUESTS", "5");
    let _window = EnvGuard::set("BM_RATE_LIMIT_WINDOW_SECS", "120");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.rate_limit.max_requests, eq(5));
    assert_that!(config.rate_limit.window_secs, eq(120));
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_zero_max_requests_when_validate_then_error() {
    // Given
    let (_temp, _dir, _secret) = setup_valid_env();
    let _max = EnvGuard::set("BM_RATE_LIMIT_MAX_REQUESTS", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("rate_limit.max_requests"));
}

#[test]
#[serial]
fn given_window_over_one_hour_when_validate_then_error() {
    let (_temp, _dir, _secret) = setup_valid_env();
    let _window = EnvGuard::set("BM_RATE_LIMIT_WINDOW_SECS", "3601");

    let config = Config::load().unwrap();

    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_window_out_of_range_when_validate_then_error_names_bounds() {
    let (_temp, _dir, _secret) = setup_valid_env();
    let _window = EnvGuard::set("BM_RATE_LIMIT_WINDOW_SECS", "0");

    let config = Config::load().unwrap();
    let err_msg = format!("{}", config.validate().unwrap_err());

    assert_that!(err_msg, contains_substring("rate_limit.window_secs must be 1-3600, got 0"));
}
