use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, SupportConfig};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Support links
// =========================================================================

#[test]
fn given_default_links_when_validate_then_ok() {
    let result = SupportConfig::default().validate();

    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_phone_url_without_tel_scheme_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _phone = EnvGuard::set("PROFILE_SUPPORT_PHONE_URL", "+254716304517");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("support.phone_url"));
}

#[test]
#[serial]
fn given_plain_http_social_link_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _url = EnvGuard::set("PROFILE_SUPPORT_TWITTER_URL", "http://twitter.com/acme");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
fn given_scheme_only_messaging_url_when_validate_then_error() {
    // Given
    let config = SupportConfig {
        messaging_url: String::from("https://"),
        ..SupportConfig::default()
    };

    // When
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}
