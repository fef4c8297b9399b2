use crate::storage::{open_storage, AppStorage};
use api_client::ApiClient;
use dioxus::prelude::*;
use shared_types::{AppError, LoginData, Role, Session, SessionStore, User};

/// Global authentication state.
///
/// Wraps the one [`SessionStore`] for this window. Views read through it,
/// and only the login form and the logout button write.
#[derive(Clone, Copy)]
pub struct AuthState {
    store: Signal<SessionStore<AppStorage>>,
}

impl AuthState {
    /// Restore whatever session the platform storage still holds.
    pub fn new() -> Self {
        Self {
            store: Signal::new(SessionStore::restore(open_storage())),
        }
    }

    /// Snapshot of the current session; subscribes the caller to changes.
    pub fn session(&self) -> Session {
        self.store.read().session().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.read().is_authenticated()
    }

    pub fn user(&self) -> Option<User> {
        self.store.read().session().user().cloned()
    }

    pub fn role(&self) -> Option<Role> {
        self.store.read().session().role()
    }

    pub fn set_credentials(&mut self, data: LoginData) -> Result<(), AppError> {
        self.store.write().set_credentials(data.user, data.token)
    }

    pub fn logout(&mut self) {
        self.store.write().logout();
    }

    /// `base` authenticated with the current token. Does not subscribe.
    pub fn client(&self, base: &ApiClient) -> ApiClient {
        base.with_token(self.store.peek().session().token())
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Hook to access the anonymous API client provided at the root.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}
