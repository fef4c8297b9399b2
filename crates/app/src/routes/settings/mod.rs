use crate::auth::use_auth;
use crate::format_helpers::{format_timestamp, or_dash};
use dioxus::prelude::*;
use shared_types::role_display_name;
use shared_ui::{Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle};

/// Read-only profile of the signed-in user.
#[component]
pub fn Settings() -> Element {
    let auth = use_auth();
    let Some(user) = auth.user() else {
        return rsx! {};
    };

    let role = role_display_name(&user.role.name);
    let registered_by = user.registered_by.map(|id| format!("User #{id}"));
    let member_since = user.created_at.as_deref().map(format_timestamp);

    let rows: Vec<(&str, String)> = vec![
        ("Full name", user.full_name.clone()),
        ("Email", user.email.clone()),
        ("Phone", or_dash(user.phone.as_deref())),
        ("Address", or_dash(user.address.as_deref())),
        ("RFID tag", or_dash(user.rfid_tag.as_deref())),
        ("Vehicle", or_dash(user.vehicle_id.as_deref())),
        ("Registered by", or_dash(registered_by.as_deref())),
        ("Member since", or_dash(member_since.as_deref())),
    ];

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./settings.css") }

        Card {
            CardHeader {
                div {
                    CardTitle { "Profile" }
                    CardDescription { "Your account details as registered with Kronotrack." }
                }
                Badge { variant: BadgeVariant::Info, "{role}" }
            }
            CardContent {
                dl { class: "settings-details",
                    for (label, value) in rows {
                        div { key: "{label}", class: "settings-row",
                            dt { "{label}" }
                            dd { "{value}" }
                        }
                    }
                }
            }
        }
    }
}
