use crate::error::AppError;
use crate::role::Role;
use crate::user::User;
use std::collections::HashMap;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the serialized [`User`].
pub const USER_KEY: &str = "user";

/// Durable key/value storage backing the session (browser `sessionStorage`
/// on the web, an in-memory map elsewhere).
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&mut self, key: &str);
}

/// In-memory [`SessionStorage`]. Lives as long as the process, which is
/// the "tab" for desktop builds and tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with raw entries.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            read_only: false,
        }
    }

    /// Storage whose writes always fail (quota exhausted, private mode).
    pub fn read_only() -> Self {
        Self {
            entries: HashMap::new(),
            read_only: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        if self.read_only {
            return Err(AppError::storage(format!("storage is read-only: {key}")));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Credentials {
    user: User,
    token: String,
}

/// Who is logged in and with which credential.
///
/// User and token are held together, so "authenticated" can never
/// disagree with their presence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    credentials: Option<Credentials>,
}

impl Session {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&User> {
        self.credentials.as_ref().map(|c| &c.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.token.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(User::role)
    }
}

/// Single source of truth for the current session, mirrored to durable
/// storage. Mutated only through [`SessionStore::set_credentials`] and
/// [`SessionStore::logout`].
#[derive(Debug)]
pub struct SessionStore<S: SessionStorage> {
    session: Session,
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Rebuild the session saved in `storage`.
    ///
    /// Missing, partial or malformed entries yield an empty session and
    /// are purged. Never fails.
    pub fn restore(mut storage: S) -> Self {
        let token = storage.get(TOKEN_KEY);
        let user_json = storage.get(USER_KEY);

        let session = match (token, user_json) {
            (None, None) => Session::empty(),
            (Some(token), Some(user_json)) if !token.trim().is_empty() => {
                match serde_json::from_str::<User>(&user_json) {
                    Ok(user) => {
                        tracing::debug!(user_id = user.id, "restored persisted session");
                        Session {
                            credentials: Some(Credentials { user, token }),
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "persisted user is malformed, clearing session");
                        purge(&mut storage);
                        Session::empty()
                    }
                }
            }
            _ => {
                tracing::warn!("persisted session is incomplete, clearing session");
                purge(&mut storage);
                Session::empty()
            }
        };

        Self { session, storage }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Replace the session with `user` + `token` and persist both.
    ///
    /// A blank token is rejected and the store is left unchanged. A failed
    /// storage write keeps the in-memory session but leaves no partial
    /// entry behind.
    pub fn set_credentials(&mut self, user: User, token: impl Into<String>) -> Result<(), AppError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(AppError::bad_request("Session token must not be empty"));
        }
        let user_json = serde_json::to_string(&user)
            .map_err(|e| AppError::internal(format!("failed to serialize user: {e}")))?;

        let persisted = self
            .storage
            .set(TOKEN_KEY, &token)
            .and_then(|_| self.storage.set(USER_KEY, &user_json));
        if let Err(e) = persisted {
            tracing::warn!(error = %e, "could not persist session, it will not survive a reload");
            purge(&mut self.storage);
        }

        tracing::info!(user_id = user.id, role = user.role().as_str(), "session established");
        self.session = Session {
            credentials: Some(Credentials { user, token }),
        };
        Ok(())
    }

    /// Clear the session and its persisted entries.
    pub fn logout(&mut self) {
        if let Some(user) = self.session.user() {
            tracing::info!(user_id = user.id, "session cleared");
        }
        self.session = Session::empty();
        purge(&mut self.storage);
    }
}

fn purge<S: SessionStorage>(storage: &mut S) {
    storage.remove(TOKEN_KEY);
    storage.remove(USER_KEY);
}
