use crate::common::*;
use api_client::fetch_tickets;
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, INVALID_USER_ID_MESSAGE};

#[tokio::test]
async fn list_sends_bearer_token() {
    let backend = spawn_backend().await;
    let client = backend.client().with_token(Some(TICKETER_TOKEN));

    let tickets = fetch_tickets(&client, "").await.unwrap();

    assert_eq!(tickets.len(), 3);
    let calls = backend.calls_to("/v1/api/tickets");
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, "GET");
    assert_eq!(calls[0].query, None);
    assert_eq!(
        calls[0].authorization.as_deref(),
        Some(format!("Bearer {TICKETER_TOKEN}").as_str())
    );
}

#[tokio::test]
async fn list_decodes_nested_parties() {
    let backend = spawn_backend().await;
    let client = backend.client().with_token(Some(TICKETER_TOKEN));

    let tickets = fetch_tickets(&client, "").await.unwrap();

    let validated = tickets.iter().find(|t| t.id == 2).unwrap();
    assert!(validated.is_validated);
    assert_eq!(validated.user.full_name, "Rider 12");
    assert_eq!(validated.validator_name(), Some("Tolu Ade"));

    let pending = tickets.iter().find(|t| t.id == 1).unwrap();
    assert_eq!(pending.validator_name(), None);
}

#[tokio::test]
async fn user_filter_is_sent_as_query() {
    let backend = spawn_backend().await;
    let client = backend.client().with_token(Some(TICKETER_TOKEN));

    let tickets = fetch_tickets(&client, " 12 ").await.unwrap();

    assert_eq!(tickets.len(), 2);
    assert!(tickets.iter().all(|t| t.user_id == 12));
    let calls = backend.calls_to("/v1/api/tickets");
    assert_eq!(calls[0].query.as_deref(), Some("userId=12"));
}

#[tokio::test]
async fn malformed_filter_makes_no_request() {
    let backend = spawn_backend().await;
    let client = backend.client().with_token(Some(TICKETER_TOKEN));

    let err = fetch_tickets(&client, "abc").await.unwrap_err();

    assert!(err.is_validation());
    assert_eq!(err.message, INVALID_USER_ID_MESSAGE);
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn missing_token_is_unauthorized() {
    let backend = spawn_backend().await;

    let err = fetch_tickets(&backend.client(), "").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Unauthorized");
    let calls = backend.calls_to("/v1/api/tickets");
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].authorization, None);
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let client = api_client::ApiClient::new(unreachable_base_url().await)
        .with_token(Some(TICKETER_TOKEN));

    let err = fetch_tickets(&client, "").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Network);
}
