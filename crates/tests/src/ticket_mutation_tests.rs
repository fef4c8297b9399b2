use crate::common::*;
use api_client::{fetch_tickets, submit_new_ticket, toggle_validation};
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, INVALID_USER_ID_MESSAGE};

#[tokio::test]
async fn create_ticket_for_valid_user() {
    let backend = spawn_backend().await;
    let client = backend.client().with_token(Some(TICKETER_TOKEN));

    let ticket = submit_new_ticket(&client, "55").await.unwrap();

    assert_eq!(ticket.user_id, 55);
    assert!(!ticket.is_validated);
    let calls = backend.calls_to("/v1/api/tickets");
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, "POST");

    let all = fetch_tickets(&client, "").await.unwrap();
    assert_eq!(all.len(), 4);
}

#[tokio::test]
async fn non_numeric_user_id_makes_no_request() {
    let backend = spawn_backend().await;
    let client = backend.client().with_token(Some(TICKETER_TOKEN));

    for input in ["abc", "", "0", "-4"] {
        let err = submit_new_ticket(&client, input).await.unwrap_err();
        assert!(err.is_validation(), "{input:?}");
        assert_eq!(err.message, INVALID_USER_ID_MESSAGE);
    }

    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn create_for_unknown_user_surfaces_backend_message() {
    let backend = spawn_backend().await;
    let client = backend.client().with_token(Some(TICKETER_TOKEN));

    let err = submit_new_ticket(&client, &UNKNOWN_USER_ID.to_string())
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.message, "User not found");
    assert_eq!(fetch_tickets(&client, "").await.unwrap().len(), 3);
}

#[tokio::test]
async fn toggle_flips_validation_both_ways() {
    let backend = spawn_backend().await;
    let client = backend.client().with_token(Some(TICKETER_TOKEN));
    let tickets = fetch_tickets(&client, "").await.unwrap();
    let pending = tickets.iter().find(|t| t.id == 1).unwrap();

    let validated = toggle_validation(&client, pending).await.unwrap();
    assert!(validated.is_validated);
    assert_eq!(validated.validator_name(), Some("Tolu Ade"));

    let reverted = toggle_validation(&client, &validated).await.unwrap();
    assert!(!reverted.is_validated);

    let patches: Vec<_> = backend
        .calls_to("/v1/api/tickets/1")
        .into_iter()
        .filter(|c| c.method == "PATCH")
        .collect();
    assert_eq!(patches.len(), 2);
}

#[tokio::test]
async fn toggle_missing_ticket_is_not_found() {
    let backend = spawn_backend().await;
    let client = backend.client().with_token(Some(TICKETER_TOKEN));
    let mut ticket = fetch_tickets(&client, "").await.unwrap().remove(0);
    ticket.id = 404;

    let err = toggle_validation(&client, &ticket).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.message, "Ticket not found");
}

#[tokio::test]
async fn mutations_require_a_token() {
    let backend = spawn_backend().await;

    let err = submit_new_ticket(&backend.client(), "55").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
}
