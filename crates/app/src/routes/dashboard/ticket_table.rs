use crate::format_helpers::format_timestamp;
use dioxus::prelude::*;
use shared_types::Ticket;
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow,
};

/// Ticket list. Rows get a Validate/Invalidate button when `on_toggle`
/// is set; `busy` disables those buttons while an update is in flight.
#[component]
pub fn TicketTable(
    tickets: Vec<Ticket>,
    #[props(default)] on_toggle: Option<EventHandler<Ticket>>,
    #[props(default = false)] busy: bool,
) -> Element {
    let with_actions = on_toggle.is_some();
    let columns = if with_actions { 6 } else { 5 };

    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Ticket ID" }
                DataTableColumn { "User" }
                DataTableColumn { "Status" }
                DataTableColumn { "Validated By" }
                DataTableColumn { "Created" }
                if with_actions {
                    DataTableColumn { "Actions" }
                }
            }
            DataTableBody {
                if tickets.is_empty() {
                    DataTableEmpty {
                        columns,
                        title: "No tickets found",
                        hint: "Create a ticket or change the search.",
                    }
                }
                for ticket in tickets {
                    TicketRow { key: "{ticket.id}", ticket, on_toggle, busy }
                }
            }
        }
    }
}

#[component]
fn TicketRow(ticket: Ticket, on_toggle: Option<EventHandler<Ticket>>, busy: bool) -> Element {
    let validator = ticket.validator_name().map(str::to_string);
    let created = format_timestamp(&ticket.created_at);
    let (status_variant, status_label) = status_badge(ticket.is_validated);
    let (action_variant, action_label) = toggle_button(ticket.is_validated);
    let for_toggle = ticket.clone();

    rsx! {
        DataTableRow {
            DataTableCell {
                span { class: "ticket-id", "#{ticket.id}" }
            }
            DataTableCell {
                p { class: "ticket-user-name", "{ticket.user.full_name}" }
                p { class: "ticket-user-id", "ID: {ticket.user_id}" }
            }
            DataTableCell {
                Badge { variant: status_variant, "{status_label}" }
            }
            DataTableCell {
                match validator {
                    Some(name) => rsx! { "{name}" },
                    None => rsx! { span { class: "ticket-muted", "\u{2014}" } },
                }
            }
            DataTableCell { "{created}" }
            if let Some(handler) = on_toggle {
                DataTableCell {
                    Button {
                        variant: action_variant,
                        disabled: busy,
                        onclick: move |_| handler.call(for_toggle.clone()),
                        "{action_label}"
                    }
                }
            }
        }
    }
}

fn status_badge(validated: bool) -> (BadgeVariant, &'static str) {
    if validated {
        (BadgeVariant::Success, "Validated")
    } else {
        (BadgeVariant::Warning, "Pending")
    }
}

/// The row action flips the current state.
fn toggle_button(validated: bool) -> (ButtonVariant, &'static str) {
    if validated {
        (ButtonVariant::Warning, "Invalidate")
    } else {
        (ButtonVariant::Success, "Validate")
    }
}
