use dioxus::prelude::*;

/// Centered dialog over a dimmed backdrop.
///
/// Clicking the backdrop, the close button or pressing Escape calls
/// `on_close`; the caller owns the `open` flag.
#[component]
pub fn Modal(
    open: bool,
    title: String,
    #[props(default)] description: Option<String>,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },
            div {
                class: "modal",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |evt| evt.stop_propagation(),
                header { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        r#type: "button",
                        "aria-label": "Close",
                        onclick: move |_| on_close.call(()),
                        "\u{00d7}"
                    }
                }
                if let Some(description) = description {
                    p { class: "modal-description", "{description}" }
                }
                div { class: "modal-body", {children} }
            }
        }
    }
}
