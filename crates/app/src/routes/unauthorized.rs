use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdShield;
use dioxus_free_icons::Icon;
use shared_ui::Button;

/// Shown when a signed-in user opens a page their role may not see.
#[component]
pub fn Unauthorized() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./unauthorized.css") }

        div { class: "unauthorized-page",
            div { class: "unauthorized-card",
                div { class: "unauthorized-icon",
                    Icon::<LdShield> { icon: LdShield, width: 32, height: 32 }
                }
                h2 { class: "unauthorized-title", "Access Denied" }
                p { class: "unauthorized-message",
                    "You don't have permission to access this page."
                }
                Button {
                    class: "unauthorized-back",
                    onclick: move |_| navigator().go_back(),
                    "Go Back"
                }
            }
        }
    }
}
