//! Contract tests for `HttpApi` against a mock Rulehub server.

use std::time::Duration;

use api::{AccountApi, ApiError, ClientConfig, HttpApi, LoginStatus, RegisterStatus, SettingsUpdate};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpApi {
    HttpApi::new(&ClientConfig::new(server.uri()).with_timeout_secs(2))
        .unwrap_or_else(|e| panic!("client: {e}"))
}

#[tokio::test]
async fn login_maps_status_codes() {
    for (code, expected) in [
        (200, LoginStatus::Ok),
        (600, LoginStatus::TwoFactorRequired),
        (403, LoginStatus::Forbidden),
        (500, LoginStatus::Other(500)),
    ] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(json!({"email": "ada@example.com", "password": "pw"})))
            .respond_with(ResponseTemplate::new(code))
            .expect(1)
            .mount(&server)
            .await;

        let status = client_for(&server).login("ada@example.com", "pw").await;
        assert_eq!(status.ok(), Some(expected), "status {code}");
    }
}

#[tokio::test]
async fn register_sends_credentials_and_expects_201() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .and(body_json(json!({
            "username": "ada",
            "email": "ada@example.com",
            "password": "pw",
        })))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let api = client_for(&server);
    let status = api.register("ada", "ada@example.com", "pw").await;
    assert_eq!(status.ok(), Some(RegisterStatus::Created));
}

#[tokio::test]
async fn register_conflict_is_a_failure_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(ResponseTemplate::new(409))
        .mount(&server)
        .await;

    let status = client_for(&server).register("ada", "ada@example.com", "pw").await;
    assert_eq!(status.ok(), Some(RegisterStatus::Failed(409)));
}

#[tokio::test]
async fn verify_2fa_is_true_only_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/2fa"))
        .and(body_json(json!({"email": "ada@example.com", "code": "123456"})))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/2fa"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let api = client_for(&server);
    assert_eq!(api.verify_2fa("ada@example.com", "123456").await.ok(), Some(true));
    assert_eq!(api.verify_2fa("ada@example.com", "000000").await.ok(), Some(false));
}

#[tokio::test]
async fn current_user_is_decoded_or_absent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1",
            "username": "ada",
            "email": "ada@example.com",
        })))
        .mount(&server)
        .await;

    let user = client_for(&server)
        .get_user_info()
        .await
        .unwrap_or_else(|e| panic!("Expected Ok, got Err: {e}"))
        .unwrap_or_else(|| panic!("Expected a user"));
    assert_eq!(user.id, "1");
    assert_eq!(user.username, "ada");
    assert_eq!(user.avatar_url, None);

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    assert_eq!(client_for(&server).get_user_info().await.ok(), Some(None));
}

#[tokio::test]
async fn current_user_server_error_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let result = client_for(&server).get_user_info().await;
    assert!(matches!(result, Err(ApiError::Status(502))), "got {result:?}");
}

#[tokio::test]
async fn profile_fetch_and_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/42/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "42",
            "username": "grace",
            "description": "compilers",
            "avatar_url": "https://cdn.rulehub.dev/a/42.png",
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/7/profile"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let api = client_for(&server);
    let profile = api
        .get_user_profile("42")
        .await
        .unwrap_or_else(|e| panic!("Expected Ok, got Err: {e}"));
    assert_eq!(profile.username, "grace");
    assert_eq!(profile.description, "compilers");
    assert!(profile.exists());

    let err = api.get_user_profile("7").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn malformed_profile_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/42/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let result = client_for(&server).get_user_profile("42").await;
    assert!(matches!(result, Err(ApiError::Decode(_))), "got {result:?}");
}

#[tokio::test]
async fn settings_and_avatar_updates() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/users/me/settings"))
        .and(body_json(json!({"username": "ada", "description": "hi"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/users/me/avatar"))
        .and(header("content-type", "image/png"))
        .respond_with(ResponseTemplate::new(413))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server);
    let update = SettingsUpdate {
        username: "ada".into(),
        description: "hi".into(),
    };
    assert_eq!(api.update_settings(&update).await.ok(), Some(true));
    assert_eq!(api.update_avatar(&[0x89, b'P', b'N', b'G']).await.ok(), Some(false));
}

#[tokio::test]
async fn session_cookie_is_replayed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).insert_header("set-cookie", "sid=abc; Path=/"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("cookie", "sid=abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "1", "username": "ada"})))
        .mount(&server)
        .await;

    let api = client_for(&server);
    assert_eq!(api.login("ada@example.com", "pw").await.ok(), Some(LoginStatus::Ok));
    let user = api.get_user_info().await.ok().flatten();
    assert_eq!(user.map(|u| u.username), Some("ada".to_string()));
}

#[tokio::test]
async fn slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let api = HttpApi::new(&ClientConfig::new(server.uri()).with_timeout_secs(1))
        .unwrap_or_else(|e| panic!("client: {e}"));
    let result = api.get_user_info().await;
    assert!(matches!(result, Err(ApiError::Timeout)), "got {result:?}");
}

#[tokio::test]
async fn logout_reports_failures() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = client_for(&server).logout().await;
    assert!(matches!(result, Err(ApiError::Status(500))), "got {result:?}");
}
