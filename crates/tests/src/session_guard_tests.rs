use crate::common::*;
use api_client::authenticate;
use pretty_assertions::assert_eq;
use shared_types::{
    check_access, check_guest, GuardDecision, MemoryStorage, Role, SessionStorage, SessionStore,
    TOKEN_KEY, USER_KEY,
};

async fn logged_in(email: &str) -> SessionStore<MemoryStorage> {
    let backend = spawn_backend().await;
    let data = authenticate(&backend.client(), email, PASSWORD).await.unwrap();
    let mut store = SessionStore::restore(MemoryStorage::new());
    store.set_credentials(data.user, data.token).unwrap();
    store
}

#[tokio::test]
async fn ticketer_session_is_persisted() {
    let store = logged_in(TICKETER_EMAIL).await;

    assert!(store.is_authenticated());
    assert_eq!(store.session().token(), Some(TICKETER_TOKEN));
    assert_eq!(store.storage().get(TOKEN_KEY).as_deref(), Some(TICKETER_TOKEN));
    let stored_user = store.storage().get(USER_KEY).unwrap();
    assert!(stored_user.contains("Tolu Ade"));
}

#[tokio::test]
async fn session_survives_a_reload() {
    let storage = logged_in(ADMIN_EMAIL).await.into_storage();

    let restored = SessionStore::restore(storage);

    assert!(restored.is_authenticated());
    assert_eq!(restored.session().role(), Some(Role::Admin));
    assert_eq!(restored.session().token(), Some(ADMIN_TOKEN));
}

#[tokio::test]
async fn ticketer_is_kept_out_of_admin_views() {
    let store = logged_in(TICKETER_EMAIL).await;
    let session = store.session();

    assert_eq!(check_access(session, &[Role::Ticketer]), GuardDecision::Permit);
    assert_eq!(
        check_access(session, &[Role::Admin]),
        GuardDecision::RedirectUnauthorized
    );
    assert_eq!(
        GuardDecision::RedirectUnauthorized.redirect_path(),
        Some("/unauthorized")
    );
    assert_eq!(check_access(session, &[]), GuardDecision::Permit);
}

#[tokio::test]
async fn login_page_sends_authenticated_user_to_their_dashboard() {
    let ticketer = logged_in(TICKETER_EMAIL).await;
    let admin = logged_in(ADMIN_EMAIL).await;

    assert_eq!(check_guest(ticketer.session()), Some("/dashboard/ticketer"));
    assert_eq!(check_guest(admin.session()), Some("/dashboard/admin"));
}

#[tokio::test]
async fn logout_sends_protected_views_back_to_login() {
    let mut store = logged_in(TICKETER_EMAIL).await;

    store.logout();

    assert!(!store.is_authenticated());
    assert!(store.storage().is_empty());
    assert_eq!(
        check_access(store.session(), &[Role::Ticketer]),
        GuardDecision::RedirectLogin
    );
    assert_eq!(check_guest(store.session()), None);

    let after_reload = SessionStore::restore(store.into_storage());
    assert!(!after_reload.is_authenticated());
}

#[tokio::test]
async fn read_only_storage_keeps_session_for_this_tab_only() {
    let backend = spawn_backend().await;
    let data = authenticate(&backend.client(), TICKETER_EMAIL, PASSWORD)
        .await
        .unwrap();
    let mut store = SessionStore::restore(MemoryStorage::read_only());

    store.set_credentials(data.user, data.token).unwrap();

    assert!(store.is_authenticated());
    let after_reload = SessionStore::restore(store.into_storage());
    assert!(!after_reload.is_authenticated());
}
