use crate::common::*;
use api_client::{authenticate, LOGIN_FAILED_MESSAGE};
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, Role, MISSING_CREDENTIALS_MESSAGE};

#[tokio::test]
async fn ticketer_login_returns_user_and_token() {
    let backend = spawn_backend().await;

    let data = authenticate(&backend.client(), TICKETER_EMAIL, PASSWORD)
        .await
        .unwrap();

    assert_eq!(data.token, TICKETER_TOKEN);
    assert_eq!(data.user.full_name, "Tolu Ade");
    assert_eq!(data.user.role(), Role::Ticketer);
    assert_eq!(backend.calls_to("/v1/api/auth/login").len(), 1);
}

#[tokio::test]
async fn login_request_never_carries_a_bearer_token() {
    let backend = spawn_backend().await;
    let client = backend.client().with_token(Some("stale-token"));

    authenticate(&client, ADMIN_EMAIL, PASSWORD).await.unwrap();

    let calls = backend.calls_to("/v1/api/auth/login");
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, "POST");
    assert_eq!(calls[0].authorization, None);
}

#[tokio::test]
async fn email_is_trimmed_before_sending() {
    let backend = spawn_backend().await;

    let data = authenticate(&backend.client(), &format!("  {TICKETER_EMAIL} "), PASSWORD)
        .await
        .unwrap();

    assert_eq!(data.user.email, TICKETER_EMAIL);
}

#[tokio::test]
async fn wrong_password_surfaces_backend_message() {
    let backend = spawn_backend().await;

    let err = authenticate(&backend.client(), TICKETER_EMAIL, "nope")
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Invalid credentials");
}

#[tokio::test]
async fn failure_without_message_uses_fallback() {
    let backend = spawn_backend().await;

    let err = authenticate(&backend.client(), SILENT_FAILURE_EMAIL, PASSWORD)
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, LOGIN_FAILED_MESSAGE);
}

#[tokio::test]
async fn unknown_account_maps_to_not_found() {
    let backend = spawn_backend().await;

    let err = authenticate(&backend.client(), "ghost@kronotrack.test", PASSWORD)
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.message, "User not found");
}

#[tokio::test]
async fn empty_fields_make_no_request() {
    let backend = spawn_backend().await;

    for (email, password) in [("", PASSWORD), (TICKETER_EMAIL, ""), ("", "")] {
        let err = authenticate(&backend.client(), email, password)
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.message, MISSING_CREDENTIALS_MESSAGE);
    }

    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let client = api_client::ApiClient::new(unreachable_base_url().await);

    let err = authenticate(&client, TICKETER_EMAIL, PASSWORD)
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Network);
    assert_eq!(err.message, LOGIN_FAILED_MESSAGE);
}
