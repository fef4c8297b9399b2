use dioxus::prelude::*;

/// Centered spinner with a caption, for sections waiting on the network.
#[component]
pub fn LoadingState(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "loading-state", role: "status",
            span { class: "loading-spinner" }
            span { class: "loading-label", "{label}" }
        }
    }
}
