use super::ticket_table::TicketTable;
use super::PageIntro;
use crate::actions::use_header_action;
use crate::auth::{use_api, use_auth};
use crate::format_helpers::tickets_found;
use api_client::{submit_new_ticket, toggle_validation};
use chrono::Utc;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdCheck, LdClock, LdSearch, LdTicket};
use dioxus_free_icons::Icon;
use shared_types::{parse_user_filter, HeaderAction, Ticket, TicketStats};
use shared_ui::{
    Banner, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Input, LoadingState,
    Modal, StatCard, StatGrid, StatTone,
};

/// Ticket desk: stats, holder search, validation toggles and the
/// create-ticket dialog opened from the header.
#[component]
pub fn TicketerDashboard() -> Element {
    let auth = use_auth();
    let api = use_api();

    let mut search_input = use_signal(String::new);
    let mut active_filter = use_signal(|| Option::<i64>::None);
    let mut search_error = use_signal(|| Option::<String>::None);
    let mut action_error = use_signal(|| Option::<String>::None);
    let mut updating = use_signal(|| false);

    let mut create_open = use_signal(|| false);
    let mut new_user_id = use_signal(String::new);
    let mut create_error = use_signal(|| Option::<String>::None);
    let mut creating = use_signal(|| false);

    use_header_action(move |action| match action {
        HeaderAction::CreateTicket => create_open.set(true),
    });

    let api_for_list = api.clone();
    let mut tickets = use_resource(move || {
        let client = auth.client(&api_for_list);
        let filter = active_filter();
        async move { client.list_tickets(filter).await }
    });

    let handle_search = move |_: MouseEvent| match parse_user_filter(&search_input()) {
        Ok(filter) => {
            search_error.set(None);
            if filter == active_filter() {
                tickets.restart();
            } else {
                active_filter.set(filter);
            }
        }
        Err(e) => search_error.set(Some(e.message)),
    };

    let handle_clear = move |_: MouseEvent| {
        search_input.set(String::new());
        search_error.set(None);
        if active_filter().is_some() {
            active_filter.set(None);
        } else {
            tickets.restart();
        }
    };

    let api_for_toggle = api.clone();
    let handle_toggle = move |ticket: Ticket| {
        let client = auth.client(&api_for_toggle);
        spawn(async move {
            updating.set(true);
            match toggle_validation(&client, &ticket).await {
                Ok(updated) => {
                    tracing::debug!(ticket_id = updated.id, validated = updated.is_validated, "validation toggled");
                    action_error.set(None);
                    tickets.restart();
                }
                Err(e) => action_error.set(Some(e.message)),
            }
            updating.set(false);
        });
    };

    let api_for_create = api.clone();
    let handle_create = move |_: MouseEvent| {
        if creating() {
            return;
        }
        let client = auth.client(&api_for_create);
        spawn(async move {
            creating.set(true);
            create_error.set(None);
            match submit_new_ticket(&client, &new_user_id()).await {
                Ok(_) => {
                    create_open.set(false);
                    new_user_id.set(String::new());
                    tickets.restart();
                }
                Err(e) => create_error.set(Some(e.message)),
            }
            creating.set(false);
        });
    };

    let mut close_create = move || {
        create_open.set(false);
        create_error.set(None);
        new_user_id.set(String::new());
    };

    let state = tickets.read().clone();
    let loaded: &[Ticket] = match &state {
        Some(Ok(list)) => list,
        _ => &[],
    };
    let stats = TicketStats::compute(loaded, Utc::now().date_naive());

    rsx! {
        div { class: "dashboard-stack",
            PageIntro {
                title: "Tickets",
                subtitle: "Manage and validate user tickets",
            }

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
                    label: "Today",
                    value: "{stats.today}",
                    tone: StatTone::Purple,
                    icon: rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 22, height: 22 } },
                }
            }

            Card {
                CardContent {
                    div { class: "ticket-search",
                        Input {
                            id: "ticket-search",
                            input_type: "number",
                            placeholder: "Search by User ID...",
                            value: search_input(),
                            error: search_error(),
                            on_input: move |evt: FormEvent| search_input.set(evt.value()),
                        }
                        Button { onclick: handle_search,
                            Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                            "Search"
                        }
                        if !search_input().is_empty() || active_filter().is_some() {
                            Button { variant: ButtonVariant::Secondary, onclick: handle_clear, "Clear" }
                        }
                    }
                }
            }

            Banner { message: action_error }

            Card {
                CardHeader {
                    CardTitle { "Tickets" }
                    p { class: "ticket-count", "{tickets_found(loaded.len())}" }
                }
                match &state {
                    None => rsx! { LoadingState { label: "Loading tickets..." } },
                    Some(Err(e)) => rsx! {
                        CardContent {
                            p { class: "input-error", "{e.friendly_message()}" }
                        }
                    },
                    Some(Ok(list)) => rsx! {
                        TicketTable {
                            tickets: list.clone(),
                            on_toggle: handle_toggle,
                            busy: updating(),
                        }
                    },
                }
            }

            Modal {
                open: create_open(),
                title: "Create New Ticket",
                on_close: move |_| close_create(),
                Banner { message: create_error, dismiss_after_ms: 0 }
                Input {
                    id: "new-ticket-user",
                    label: "User ID",
                    input_type: "number",
                    placeholder: "Enter user ID",
                    value: new_user_id(),
                    disabled: creating(),
                    on_input: move |evt: FormEvent| new_user_id.set(evt.value()),
                }
                p { class: "modal-hint", "Enter the ID of the user you want to create a ticket for" }
                div { class: "modal-actions",
                    Button {
                        loading: creating(),
                        loading_label: "Creating...",
                        onclick: handle_create,
                        "Create Ticket"
                    }
                    Button { variant: ButtonVariant::Secondary, onclick: move |_| close_create(), "Cancel" }
                }
            }
        }
    }
}
