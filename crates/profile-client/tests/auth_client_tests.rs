//! Integration tests for the auth client using wiremock mock server

use profile_client::{AuthClient, FirebaseEndpoints, Session, SessionStore, TokenProvider};
use profile_core::{AuthService, ProfileError};

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde_json::json;
use tempfile::TempDir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path, query_param},
};

fn endpoints(server: &MockServer) -> FirebaseEndpoints {
    FirebaseEndpoints {
        auth_url: server.uri(),
        token_url: server.uri(),
        firestore_url: server.uri(),
        api_key: String::from("test-key"),
        project_id: String::from("demo"),
    }
}

fn http() -> reqwest::Client {
    profile_client::build_http_client(Duration::from_secs(5)).unwrap()
}

fn saved_session(dir: &TempDir, expires_in_secs: i64) -> SessionStore {
    let store = SessionStore::new(dir.path().join("session.json"));
    store
        .save(&Session {
            uid: String::from("u1"),
            email: Some(String::from("a@b.com")),
            id_token: String::from("old-id-token"),
            refresh_token: String::from("old-refresh-token"),
            expires_at: Utc::now() + chrono::Duration::seconds(expires_in_secs),
        })
        .unwrap();
    store
}

async fn mount_sign_in(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .and(query_param("key", "test-key"))
        .and(body_json(json!({
            "email": "a@b.com",
            "password": "hunter22",
            "returnSecureToken": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "identitytoolkit#VerifyPasswordResponse",
            "localId": "u1",
            "email": "a@b.com",
            "displayName": "",
            "idToken": "new-id-token",
            "registered": true,
            "refreshToken": "new-refresh-token",
            "expiresIn": "3600"
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_sign_in_success_persists_and_publishes_identity() {
    let server = MockServer::start().await;
    mount_sign_in(&server).await;
    let dir = TempDir::new().unwrap();
    let sessions = SessionStore::new(dir.path().join("session.json"));

    let client = AuthClient::new(http(), endpoints(&server), sessions.clone()).unwrap();
    let receiver = client.subscribe();
    assert!(client.current_identity().is_none());

    let identity = client.sign_in_with_password("a@b.com", "hunter22").await.unwrap();

    assert_eq!(identity.uid, "u1");
    assert_eq!(identity.email.as_deref(), Some("a@b.com"));
    assert_eq!(client.current_identity(), Some(identity.clone()));
    assert_eq!(*receiver.borrow(), Some(identity));

    let saved = sessions.load().unwrap().unwrap();
    assert_eq!(saved.id_token, "new-id-token");
    assert_eq!(saved.refresh_token, "new-refresh-token");
    assert!(saved.expires_at > Utc::now() + chrono::Duration::seconds(3000));
}

#[tokio::test]
async fn test_sign_in_invalid_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "code": 400,
                "message": "INVALID_LOGIN_CREDENTIALS",
                "errors": [{ "message": "INVALID_LOGIN_CREDENTIALS", "domain": "global", "reason": "invalid" }]
            }
        })))
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();
    let sessions = SessionStore::new(dir.path().join("session.json"));

    let client = AuthClient::new(http(), endpoints(&server), sessions.clone()).unwrap();
    let err = client
        .sign_in_with_password("a@b.com", "wrong")
        .await
        .unwrap_err();

    assert_eq!(err.api_code(), Some("INVALID_LOGIN_CREDENTIALS"));
    assert!(client.current_identity().is_none());
    assert!(!sessions.path().exists());
}

#[tokio::test]
async fn test_saved_session_restored_on_start() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let sessions = saved_session(&dir, 3600);

    let client = AuthClient::new(http(), endpoints(&server), sessions).unwrap();

    let identity = client.current_identity().unwrap();
    assert_eq!(identity.uid, "u1");
    assert_eq!(identity.email.as_deref(), Some("a@b.com"));
}

#[tokio::test]
async fn test_sign_out_clears_session_and_publishes_none() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let sessions = saved_session(&dir, 3600);

    let client = AuthClient::new(http(), endpoints(&server), sessions.clone()).unwrap();
    let receiver = client.subscribe();

    AuthService::sign_out(&client).await.unwrap();

    assert!(receiver.has_changed().unwrap());
    assert!(receiver.borrow().is_none());
    assert!(client.current_identity().is_none());
    assert!(!sessions.path().exists());
    assert!(client.id_token().await.unwrap().is_none());
}

#[tokio::test]
async fn test_password_reset_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:sendOobCode"))
        .and(query_param("key", "test-key"))
        .and(body_json(json!({
            "requestType": "PASSWORD_RESET",
            "email": "a@b.com"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "identitytoolkit#GetOobConfirmationCodeResponse",
            "email": "a@b.com"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();

    let client = AuthClient::new(
        http(),
        endpoints(&server),
        SessionStore::new(dir.path().join("session.json")),
    )
    .unwrap();

    client.send_password_reset_email("a@b.com").await.unwrap();
}

#[tokio::test]
async fn test_password_reset_failure_maps_to_password_reset_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:sendOobCode"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "code": 400, "message": "EMAIL_NOT_FOUND" }
        })))
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();

    let client = AuthClient::new(
        http(),
        endpoints(&server),
        SessionStore::new(dir.path().join("session.json")),
    )
    .unwrap();

    let err = client
        .send_password_reset_email("nobody@b.com")
        .await
        .unwrap_err();

    assert!(matches!(err, ProfileError::PasswordReset { .. }));
    assert!(err.to_string().contains("EMAIL_NOT_FOUND"));
}

#[tokio::test]
async fn test_fresh_token_used_without_refresh() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/token"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();

    let client = AuthClient::new(http(), endpoints(&server), saved_session(&dir, 3600)).unwrap();

    assert_eq!(
        client.id_token().await.unwrap().as_deref(),
        Some("old-id-token")
    );
}

#[tokio::test]
async fn test_expired_token_refreshed_and_saved() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/token"))
        .and(query_param("key", "test-key"))
        .and(body_json(json!({
            "grant_type": "refresh_token",
            "refresh_token": "old-refresh-token"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "expires_in": "3600",
            "token_type": "Bearer",
            "refresh_token": "new-refresh-token",
            "id_token": "new-id-token",
            "user_id": "u1",
            "project_id": "demo"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();
    let sessions = saved_session(&dir, -10);

    let client = AuthClient::new(http(), endpoints(&server), sessions.clone()).unwrap();

    assert_eq!(
        client.id_token().await.unwrap().as_deref(),
        Some("new-id-token")
    );
    // Second call reuses the refreshed token
    assert_eq!(
        client.id_token().await.unwrap().as_deref(),
        Some("new-id-token")
    );

    let saved = sessions.load().unwrap().unwrap();
    assert_eq!(saved.refresh_token, "new-refresh-token");
    assert_eq!(saved.email.as_deref(), Some("a@b.com"));
}

#[tokio::test]
async fn test_refresh_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "code": 400, "message": "TOKEN_EXPIRED", "status": "INVALID_ARGUMENT" }
        })))
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();

    let client = AuthClient::new(http(), endpoints(&server), saved_session(&dir, -10)).unwrap();

    let err = client.id_token().await.unwrap_err();
    assert!(err.to_string().contains("TOKEN_EXPIRED"));
}

#[tokio::test]
async fn test_sign_in_with_out_of_range_lifetime() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "localId": "u1",
            "email": "a@b.com",
            "idToken": "new-id-token",
            "refreshToken": "new-refresh-token",
            "expiresIn": "9223372036854775807"
        })))
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();
    let sessions = SessionStore::new(dir.path().join("session.json"));

    let client = AuthClient::new(http(), endpoints(&server), sessions.clone()).unwrap();
    let identity = client.sign_in_with_password("a@b.com", "hunter22").await.unwrap();

    assert_eq!(identity.uid, "u1");
    let saved = sessions.load().unwrap().unwrap();
    assert!(saved.expires_at <= Utc::now() + chrono::Duration::days(1));
}

#[tokio::test]
async fn test_sign_out_during_token_refresh_stays_signed_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "expires_in": "3600",
                    "token_type": "Bearer",
                    "refresh_token": "new-refresh-token",
                    "id_token": "new-id-token",
                    "user_id": "u1"
                }))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();
    let sessions = saved_session(&dir, -10);

    let client = Arc::new(
        AuthClient::new(http(), endpoints(&server), sessions.clone()).unwrap(),
    );
    let refreshing = {
        let client = client.clone();
        tokio::spawn(async move { client.id_token().await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;

    AuthService::sign_out(client.as_ref()).await.unwrap();
    let _ = refreshing.await.unwrap();

    assert!(client.current_identity().is_none());
    assert!(!sessions.path().exists());
    assert!(sessions.load().unwrap().is_none());

    let restarted = AuthClient::new(http(), endpoints(&server), sessions).unwrap();
    assert!(restarted.current_identity().is_none());
}
