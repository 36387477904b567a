use crate::{ClientError, FirebaseEndpoints};
use crate::endpoints::trim_base;

use profile_config::FirebaseConfig;

fn config() -> FirebaseConfig {
    FirebaseConfig {
        api_key: Some(String::from("test-key")),
        project_id: Some(String::from("demo-project")),
        auth_url: String::from("http://localhost:9099/identitytoolkit.googleapis.com/"),
        token_url: String::from("http://localhost:9099/securetoken.googleapis.com"),
        firestore_url: String::from("http://localhost:8080/"),
        ..FirebaseConfig::default()
    }
}

#[test]
fn test_base_url_trailing_slash_trimmed() {
    assert_eq!(trim_base("http://localhost:8080/"), "http://localhost:8080");
    assert_eq!(trim_base("http://localhost:8080"), "http://localhost:8080");
}

#[test]
fn test_endpoint_urls() {
    let endpoints = FirebaseEndpoints::from_config(&config()).unwrap();

    assert_eq!(
        endpoints.accounts_url("signInWithPassword"),
        "http://localhost:9099/identitytoolkit.googleapis.com/v1/accounts:signInWithPassword?key=test-key"
    );
    assert_eq!(
        endpoints.token_refresh_url(),
        "http://localhost:9099/securetoken.googleapis.com/v1/token?key=test-key"
    );
    assert_eq!(
        endpoints.document_url("users", "u1").unwrap().as_str(),
        "http://localhost:8080/v1/projects/demo-project/databases/(default)/documents/users/u1"
    );
}

#[test]
fn test_document_id_percent_encoded() {
    let endpoints = FirebaseEndpoints::from_config(&config()).unwrap();

    let url = endpoints.document_url("users", "a/b?c#d").unwrap();

    assert_eq!(
        url.as_str(),
        "http://localhost:8080/v1/projects/demo-project/databases/(default)/documents/users/a%2Fb%3Fc%23d"
    );
    assert!(url.query().is_none());
}

#[test]
fn test_dot_segments_rejected() {
    let endpoints = FirebaseEndpoints::from_config(&config()).unwrap();

    for id in ["", ".", ".."] {
        let err = endpoints.document_url("users", id).unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl { .. }), "{id:?}");
    }
}

#[test]
fn test_missing_api_key_rejected() {
    let config = FirebaseConfig {
        api_key: None,
        ..config()
    };

    let err = FirebaseEndpoints::from_config(&config).unwrap_err();

    assert!(err.to_string().contains("api_key"));
}
