use dioxus::prelude::*;

/// How long a banner stays up before clearing itself.
pub const BANNER_DISMISS_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BannerTone {
    #[default]
    Error,
    Success,
    Info,
}

impl BannerTone {
    fn class(&self) -> &'static str {
        match self {
            BannerTone::Error => "error",
            BannerTone::Success => "success",
            BannerTone::Info => "info",
        }
    }
}

/// Dismissible message strip bound to `message`.
///
/// Each new message restarts a timer that clears the signal after
/// `dismiss_after_ms`. A message replaced before its timer fires is left to
/// the newer timer. Passing `0` keeps the banner until closed by hand.
#[component]
pub fn Banner(
    message: Signal<Option<String>>,
    #[props(default)] tone: BannerTone,
    #[props(default = BANNER_DISMISS_MS)] dismiss_after_ms: u32,
) -> Element {
    let mut message = message;
    let mut generation = use_signal(|| 0u64);

    use_effect(move || {
        let shown = message.read().is_some();
        let current = *generation.peek() + 1;
        generation.set(current);
        if !shown || dismiss_after_ms == 0 {
            return;
        }
        spawn(async move {
            let timer = document::eval(&format!(
                "await new Promise(r => setTimeout(r, {dismiss_after_ms})); return true;"
            ));
            if timer.await.is_ok() && *generation.peek() == current {
                message.set(None);
            }
        });
    });

    let Some(text) = message.read().clone() else {
        return rsx! {};
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "banner",
            "data-tone": tone.class(),
            role: if tone == BannerTone::Error { "alert" } else { "status" },
            span { class: "banner-text", "{text}" }
            button {
                class: "banner-close",
                r#type: "button",
                "aria-label": "Dismiss",
                onclick: move |_| message.set(None),
                "\u{00d7}"
            }
        }
    }
}
