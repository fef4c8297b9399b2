//! Typed client for the remote Kronotrack API.

pub mod auth;
pub mod client;
pub mod tickets;

pub use auth::{authenticate, AuthGateway, LOGIN_FAILED_MESSAGE};
pub use client::ApiClient;
pub use tickets::{fetch_tickets, submit_new_ticket, toggle_validation};
