use dioxus::prelude::*;

use crate::routes::{redirect, Route};

/// Any path without a page. Sent to the login page, whose guest guard
/// forwards signed-in users to their dashboard.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %format!("/{}", segments.join("/")), "unknown path");
    redirect(Route::Login {})
}
