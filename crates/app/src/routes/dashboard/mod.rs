pub mod admin;
pub mod commercial;
pub mod private;
pub mod ticket_table;
pub mod ticketer;

pub use admin::AdminDashboard;
pub use commercial::CommercialDashboard;
pub use private::PrivateDashboard;
pub use ticketer::TicketerDashboard;

use dioxus::prelude::*;
use shared_types::Role;
use shared_ui::{Card, CardContent};

use crate::auth::use_auth;
use crate::routes::{dashboard_route, redirect};

/// `/dashboard` index: forwards each known role to its own dashboard.
/// Roles outside the known set have nowhere to go and stay here.
#[component]
pub fn DashboardHome() -> Element {
    let auth = use_auth();

    match auth.role() {
        Some(Role::Unknown) | None => rsx! {
            PageIntro {
                title: "Dashboard",
                subtitle: "Welcome to Kronotrack",
            }
            Card {
                CardContent {
                    p { "No dashboard is available for your account yet. Contact an administrator." }
                }
            }
        },
        Some(role) => redirect(dashboard_route(role)),
    }
}

/// Heading and one-line description at the top of a dashboard.
#[component]
pub fn PageIntro(title: String, subtitle: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        div { class: "page-intro",
            h2 { class: "page-intro-title", "{title}" }
            p { class: "page-intro-subtitle", "{subtitle}" }
        }
    }
}
