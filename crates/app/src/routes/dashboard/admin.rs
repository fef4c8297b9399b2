use super::ticket_table::TicketTable;
use super::PageIntro;
use crate::auth::{use_api, use_auth};
use chrono::Utc;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdCheck, LdClock, LdTicket};
use dioxus_free_icons::Icon;
use shared_types::{Ticket, TicketStats};
use shared_ui::{
    Card, CardContent, CardDescription, CardHeader, CardTitle, LoadingState, StatCard, StatGrid,
    StatTone,
};

/// Newest tickets shown on the overview.
const RECENT_LIMIT: usize = 10;

/// The `limit` most recently created tickets, newest first.
fn recent(tickets: &[Ticket], limit: usize) -> Vec<Ticket> {
    let mut sorted = tickets.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(limit);
    sorted
}

/// Read-only overview of every ticket in the system.
#[component]
pub fn AdminDashboard() -> Element {
    let auth = use_auth();
    let api = use_api();

    let tickets = use_resource(move || {
        let client = auth.client(&api);
        async move { client.list_tickets(None).await }
    });

    let state = tickets.read().clone();

    rsx! {
        div { class: "dashboard-stack",
            PageIntro {
                title: "Admin Dashboard",
                subtitle: "System-wide ticket activity",
            }

            match state {
                None => rsx! { LoadingState { label: "Loading overview..." } },
                Some(Err(e)) => rsx! {
                    Card {
                        CardContent {
                            p { class: "input-error", "{e.friendly_message()}" }
                        }
                    }
                },
                Some(Ok(list)) => rsx! { AdminOverview { tickets: list } },
            }
        }
    }
}

#[component]
fn AdminOverview(tickets: Vec<Ticket>) -> Element {
    let stats = TicketStats::compute(&tickets, Utc::now().date_naive());
    let latest = recent(&tickets, RECENT_LIMIT);

    rsx! {
        StatGrid {
            StatCard {
                label: "Total Tickets",
                value: "{stats.total}",
                tone: StatTone::Blue,
                icon: rsx! { Icon::<LdTicket> { icon: LdTicket, width: 22, height: 22 } },
            }
            StatCard {
                label: "Validated",
                value: "{stats.validated}",
                tone: StatTone::Green,
                icon: rsx! { Icon::<LdCheck> { icon: LdCheck, width: 22, height: 22 } },
            }
            StatCard {
                label: "Pending",
                value: "{stats.pending}",
                tone: StatTone::Amber,
                icon: rsx! { Icon::<LdClock> { icon: LdClock, width: 22, height: 22 } },
            }
            StatCard {
                label: "Created Today",
                value: "{stats.today}",
                tone: StatTone::Purple,
                icon: rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 22, height: 22 } },
            }
        }
        Card {
            CardHeader {
                div {
                    CardTitle { "Recent Tickets" }
                    CardDescription { "The latest tickets across all users" }
                }
            }
            TicketTable { tickets: latest }
        }
    }
}
