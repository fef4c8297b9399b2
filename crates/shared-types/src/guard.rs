//! Navigation decisions for protected and guest-only views.
//!
//! These checks shape what the UI shows; the backend still authorizes
//! every request on its own.

use crate::role::{Role, LOGIN_PATH, UNAUTHORIZED_PATH};
use crate::session::Session;

/// Outcome of checking a protected route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Permit,
    RedirectLogin,
    RedirectUnauthorized,
}

impl GuardDecision {
    /// Where to send the user, or `None` when the view may render.
    pub fn redirect_path(&self) -> Option<&'static str> {
        match self {
            GuardDecision::Permit => None,
            GuardDecision::RedirectLogin => Some(LOGIN_PATH),
            GuardDecision::RedirectUnauthorized => Some(UNAUTHORIZED_PATH),
        }
    }
}

/// Check a protected route.
///
/// Evaluated in a fixed order: an unauthenticated session goes to login;
/// a non-empty `allowed_roles` that does not contain the user's role goes
/// to unauthorized; anything else is permitted. An empty `allowed_roles`
/// admits every authenticated user.
pub fn check_access(session: &Session, allowed_roles: &[Role]) -> GuardDecision {
    let Some(role) = session.role().filter(|_| session.is_authenticated()) else {
        return GuardDecision::RedirectLogin;
    };

    if !allowed_roles.is_empty() && !allowed_roles.contains(&role) {
        return GuardDecision::RedirectUnauthorized;
    }

    GuardDecision::Permit
}

/// Check a guest-only view (the login form).
///
/// Returns the role's default dashboard when a session already exists so
/// the form is never shown to a logged-in user.
pub fn check_guest(session: &Session) -> Option<&'static str> {
    if !session.is_authenticated() {
        return None;
    }
    Some(session.role().unwrap_or(Role::Unknown).default_dashboard())
}
